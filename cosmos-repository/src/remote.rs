use crate::{exec, query_all};
use cosmos_error::{storage::StorageError, StorageResult};
use cosmos_models::{idens::catalog::CatalogColumn, record::SyncEntity};
use sea_orm::{
    sea_query::{Expr, OnConflict, Order, Query, SimpleExpr},
    ConnectionTrait,
};
use uuid::Uuid;

/// Repository for the per-family tables of the remote store.
///
/// Statements are built from the entity's `RemoteRecord` columns, so one
/// implementation serves every family.
pub struct RemoteRepository;

impl RemoteRepository {
    /// `INSERT ... ON CONFLICT (id) DO UPDATE` of every column
    pub async fn upsert<T, C>(entity: &T, db: &C) -> StorageResult<()>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        let columns = T::columns();
        let values = entity.encode().into_iter().map(SimpleExpr::from);
        let stmt = Query::insert()
            .into_table(T::table())
            .columns(columns.clone())
            .values(values)
            .map_err(|e| StorageError::Codec(e.to_string()))?
            .on_conflict(
                OnConflict::column(CatalogColumn::Id)
                    .update_columns(columns.into_iter().skip(1))
                    .to_owned(),
            )
            .to_owned();
        exec(db, &stmt).await?;
        Ok(())
    }

    /// Full-column `UPDATE ... WHERE id = ?`
    pub async fn update<T, C>(entity: &T, db: &C) -> StorageResult<()>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        let assignments = T::columns()
            .into_iter()
            .zip(entity.encode())
            .skip(1)
            .map(|(column, value)| (column, SimpleExpr::from(value)));
        let stmt = Query::update()
            .table(T::table())
            .values(assignments)
            .and_where(Expr::col(CatalogColumn::Id).eq(entity.id()))
            .to_owned();

        if exec(db, &stmt).await?.rows_affected() == 0 {
            return Err(StorageError::EntityNotFound(format!(
                "{} {}",
                T::FAMILY.table_name(),
                entity.id()
            )));
        }
        Ok(())
    }

    /// Every row of the family's table, ordered by display order
    pub async fn find_all<T, C>(db: &C) -> StorageResult<Vec<T>>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        let stmt = Query::select()
            .columns(T::columns())
            .from(T::table())
            .order_by(CatalogColumn::DisplayOrder, Order::Asc)
            .order_by(CatalogColumn::Name, Order::Asc)
            .to_owned();
        let rows = query_all(db, &stmt).await?;
        Ok(rows.iter().map(T::decode).collect())
    }

    pub async fn delete<T, C>(id: Uuid, db: &C) -> StorageResult<u64>
    where
        T: SyncEntity,
        C: ConnectionTrait,
    {
        let stmt = Query::delete()
            .from_table(T::table())
            .and_where(Expr::col(CatalogColumn::Id).eq(id))
            .to_owned();
        Ok(exec(db, &stmt).await?.rows_affected())
    }
}
