use super::{create_indexes, create_sqlite_updated_at_triggers, create_tables, drop_tables};
use cosmos_models::initializer::local_initializers;
use sea_orm_migration::prelude::*;
use tracing::{info, instrument};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[instrument(name = "migrate-local", skip_all)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let initializers = local_initializers();
        create_tables(manager, &initializers).await?;
        create_indexes(manager, &initializers).await?;
        create_sqlite_updated_at_triggers(manager, &initializers).await?;
        info!("local schema ready");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_tables(manager, &local_initializers()).await
    }
}
