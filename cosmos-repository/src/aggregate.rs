use crate::PlanetChildRepository;
use async_trait::async_trait;
use cosmos_error::StorageResult;
use cosmos_models::{domain::prelude::*, record::SyncEntity};
use sea_orm::ConnectionTrait;
use uuid::Uuid;

/// Hooks for entities whose remote representation spans more than their own
/// table. Families without child tables keep the no-op defaults.
#[async_trait]
pub trait RemoteAggregate: SyncEntity {
    /// A copy whose owned rows all carry an id, when some did not.
    ///
    /// Both stores are written from the same copy so they agree on child ids.
    fn with_child_ids(&self) -> Option<Self> {
        None
    }

    /// Remove rows owned by the entity before it is rewritten or deleted
    async fn purge_children<C: ConnectionTrait>(_id: Uuid, _db: &C) -> StorageResult<()> {
        Ok(())
    }

    /// Write the entity's owned rows
    async fn write_children<C: ConnectionTrait>(&self, _db: &C) -> StorageResult<()> {
        Ok(())
    }

    /// Load owned rows into freshly decoded entities
    async fn attach_children<C: ConnectionTrait>(_items: &mut [Self], _db: &C) -> StorageResult<()> {
        Ok(())
    }
}

#[async_trait]
impl RemoteAggregate for Planet {
    fn with_child_ids(&self) -> Option<Self> {
        if !self.has_unassigned_child_ids() {
            return None;
        }
        let mut planet = self.clone();
        planet.assign_child_ids();
        Some(planet)
    }

    async fn purge_children<C: ConnectionTrait>(id: Uuid, db: &C) -> StorageResult<()> {
        PlanetChildRepository::purge(id, db).await?;
        Ok(())
    }

    async fn write_children<C: ConnectionTrait>(&self, db: &C) -> StorageResult<()> {
        PlanetChildRepository::insert_children(self, db).await
    }

    async fn attach_children<C: ConnectionTrait>(items: &mut [Self], db: &C) -> StorageResult<()> {
        PlanetChildRepository::attach_children(items, db).await
    }
}

impl RemoteAggregate for Galaxy {}
impl RemoteAggregate for Nebula {}
impl RemoteAggregate for Star {}
impl RemoteAggregate for Blackhole {}
impl RemoteAggregate for Constellation {}
impl RemoteAggregate for PlanetCatalogItem {}
impl RemoteAggregate for User {}
