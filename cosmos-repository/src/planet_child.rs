use crate::{exec, query_all};
use cosmos_error::{storage::StorageError, StorageResult};
use cosmos_models::{
    domain::prelude::{Planet, PlanetInfoCard, PlanetLayer, PlanetMission, PlanetMyth},
    idens::planet_child::PlanetChildColumn,
    record::{read_uuid, ChildRecord},
};
use sea_orm::{
    sea_query::{Expr, Order, Query, SimpleExpr},
    ConnectionTrait,
};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Repository for the four planet child tables
pub struct PlanetChildRepository;

impl PlanetChildRepository {
    /// Delete the rows of one child table that belong to the given planet
    pub async fn purge_table<R, C>(planet_id: Uuid, db: &C) -> StorageResult<u64>
    where
        R: ChildRecord,
        C: ConnectionTrait,
    {
        let stmt = Query::delete()
            .from_table(R::table())
            .and_where(Expr::col(PlanetChildColumn::PlanetId).eq(planet_id))
            .to_owned();
        Ok(exec(db, &stmt).await?.rows_affected())
    }

    /// Delete every child row of a planet across the four tables
    pub async fn purge<C: ConnectionTrait>(planet_id: Uuid, db: &C) -> StorageResult<u64> {
        let removed = Self::purge_table::<PlanetMyth, C>(planet_id, db).await?
            + Self::purge_table::<PlanetLayer, C>(planet_id, db).await?
            + Self::purge_table::<PlanetInfoCard, C>(planet_id, db).await?
            + Self::purge_table::<PlanetMission, C>(planet_id, db).await?;
        debug!(%planet_id, removed, "purged planet children");
        Ok(removed)
    }

    /// Insert a child collection, keeping its order in the `position` column
    pub async fn insert_all<R, C>(planet_id: Uuid, items: &[R], db: &C) -> StorageResult<()>
    where
        R: ChildRecord,
        C: ConnectionTrait,
    {
        if items.is_empty() {
            return Ok(());
        }

        let mut stmt = Query::insert();
        stmt.into_table(R::table()).columns(R::columns());
        for (position, item) in items.iter().enumerate() {
            let position = i32::try_from(position)
                .map_err(|e| StorageError::Codec(format!("child position overflow: {e}")))?;
            stmt.values(
                item.encode(planet_id, position)
                    .into_iter()
                    .map(SimpleExpr::from),
            )
            .map_err(|e| StorageError::Codec(e.to_string()))?;
        }
        exec(db, &stmt).await?;
        Ok(())
    }

    /// Write the current child collections of a planet
    pub async fn insert_children<C: ConnectionTrait>(planet: &Planet, db: &C) -> StorageResult<()> {
        let id = planet.entry.id;
        Self::insert_all(id, &planet.myths, db).await?;
        Self::insert_all(id, &planet.layers, db).await?;
        Self::insert_all(id, &planet.info_cards, db).await?;
        Self::insert_all(id, &planet.missions, db).await?;
        Ok(())
    }

    /// Load the rows of one child table for many planets, grouped by planet
    /// id and in position order
    pub async fn load_grouped<R, C>(planet_ids: &[Uuid], db: &C) -> StorageResult<HashMap<Uuid, Vec<R>>>
    where
        R: ChildRecord,
        C: ConnectionTrait,
    {
        let mut grouped: HashMap<Uuid, Vec<R>> = HashMap::new();
        if planet_ids.is_empty() {
            return Ok(grouped);
        }

        let stmt = Query::select()
            .columns(R::columns())
            .from(R::table())
            .and_where(Expr::col(PlanetChildColumn::PlanetId).is_in(planet_ids.iter().copied()))
            .order_by(PlanetChildColumn::PlanetId, Order::Asc)
            .order_by(PlanetChildColumn::Position, Order::Asc)
            .to_owned();

        for row in query_all(db, &stmt).await? {
            grouped
                .entry(read_uuid(&row, PlanetChildColumn::PlanetId))
                .or_default()
                .push(R::decode(&row));
        }
        Ok(grouped)
    }

    /// Fill the child collections of freshly decoded planets
    pub async fn attach_children<C: ConnectionTrait>(
        planets: &mut [Planet],
        db: &C,
    ) -> StorageResult<()> {
        let ids: Vec<Uuid> = planets.iter().map(|p| p.entry.id).collect();
        let mut myths = Self::load_grouped::<PlanetMyth, C>(&ids, db).await?;
        let mut layers = Self::load_grouped::<PlanetLayer, C>(&ids, db).await?;
        let mut info_cards = Self::load_grouped::<PlanetInfoCard, C>(&ids, db).await?;
        let mut missions = Self::load_grouped::<PlanetMission, C>(&ids, db).await?;

        for planet in planets.iter_mut() {
            let id = planet.entry.id;
            planet.myths = myths.remove(&id).unwrap_or_default();
            planet.layers = layers.remove(&id).unwrap_or_default();
            planet.info_cards = info_cards.remove(&id).unwrap_or_default();
            planet.missions = missions.remove(&id).unwrap_or_default();
        }
        Ok(())
    }
}
