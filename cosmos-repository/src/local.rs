use chrono::Utc;
use cosmos_error::{storage::StorageError, StorageResult};
use cosmos_models::{
    entities::prelude::{LocalObject, LocalObjectActiveModel, LocalObjectColumn},
    record::SyncEntity,
};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::warn;
use uuid::Uuid;

/// Rows per multi-row insert, well below SQLite's bound parameter limit
const UPSERT_CHUNK: usize = 100;

/// Repository for the on-device object table
pub struct LocalRepository;

impl LocalRepository {
    fn to_active_model<T: SyncEntity>(entity: &T) -> StorageResult<LocalObjectActiveModel> {
        Ok(LocalObjectActiveModel {
            family: Set(T::FAMILY.as_str().to_string()),
            id: Set(entity.id()),
            display_order: Set(entity.display_order()),
            payload: Set(serde_json::to_value(entity)?),
            created_at: NotSet,
            updated_at: Set(Some(Utc::now())),
        })
    }

    fn on_conflict() -> OnConflict {
        OnConflict::columns([LocalObjectColumn::Family, LocalObjectColumn::Id])
            .update_columns([
                LocalObjectColumn::DisplayOrder,
                LocalObjectColumn::Payload,
                LocalObjectColumn::UpdatedAt,
            ])
            .to_owned()
    }

    /// Insert an entity, replacing the stored one with the same id
    pub async fn upsert<T, C>(entity: &T, db: &C) -> StorageResult<()>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        LocalObject::insert(Self::to_active_model(entity)?)
            .on_conflict(Self::on_conflict())
            .exec_without_returning(db)
            .await?;
        Ok(())
    }

    /// Upsert a batch of entities of one family
    pub async fn upsert_many<T, C>(entities: &[T], db: &C) -> StorageResult<()>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        for chunk in entities.chunks(UPSERT_CHUNK) {
            let models = chunk
                .iter()
                .map(Self::to_active_model)
                .collect::<StorageResult<Vec<_>>>()?;
            LocalObject::insert_many(models)
                .on_conflict(Self::on_conflict())
                .exec_without_returning(db)
                .await?;
        }
        Ok(())
    }

    /// Rewrite the stored payload of an existing entity
    pub async fn update<T, C>(entity: &T, db: &C) -> StorageResult<()>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        let result = LocalObject::update_many()
            .col_expr(
                LocalObjectColumn::DisplayOrder,
                Expr::value(entity.display_order()),
            )
            .col_expr(
                LocalObjectColumn::Payload,
                Expr::value(serde_json::to_value(entity)?),
            )
            .col_expr(LocalObjectColumn::UpdatedAt, Expr::value(Utc::now()))
            .filter(LocalObjectColumn::Family.eq(T::FAMILY.as_str()))
            .filter(LocalObjectColumn::Id.eq(entity.id()))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound(format!(
                "{} {}",
                T::FAMILY,
                entity.id()
            )));
        }
        Ok(())
    }

    /// All entities of a family ordered by display order.
    ///
    /// Rows whose payload no longer deserializes are skipped.
    pub async fn find_all<T, C>(db: &C) -> StorageResult<Vec<T>>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        let rows = LocalObject::find()
            .filter(LocalObjectColumn::Family.eq(T::FAMILY.as_str()))
            .order_by_asc(LocalObjectColumn::DisplayOrder)
            .order_by_asc(LocalObjectColumn::CreatedAt)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<T>(row.payload) {
                Ok(entity) => Some(entity),
                Err(e) => {
                    warn!(family = %T::FAMILY, id = %row.id, "skip unreadable local row: {e}");
                    None
                }
            })
            .collect())
    }

    /// Remove one entity, returning how many rows were deleted
    pub async fn delete<T, C>(id: Uuid, db: &C) -> StorageResult<u64>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        let result = LocalObject::delete_many()
            .filter(LocalObjectColumn::Family.eq(T::FAMILY.as_str()))
            .filter(LocalObjectColumn::Id.eq(id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count<T, C>(db: &C) -> StorageResult<u64>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        Ok(LocalObject::find()
            .filter(LocalObjectColumn::Family.eq(T::FAMILY.as_str()))
            .count(db)
            .await?)
    }
}
