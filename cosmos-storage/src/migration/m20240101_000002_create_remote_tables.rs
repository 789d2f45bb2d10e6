use super::{create_indexes, create_tables, drop_tables};
use cosmos_models::initializer::remote_initializers;
use sea_orm_migration::prelude::*;
use tracing::{info, instrument};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[instrument(name = "migrate-remote", skip_all)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let initializers = remote_initializers();
        create_tables(manager, &initializers).await?;
        create_indexes(manager, &initializers).await?;
        info!(tables = initializers.len(), "remote schema ready");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables(manager, &remote_initializers()).await
    }
}
