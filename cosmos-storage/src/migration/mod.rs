mod m20240101_000001_create_local_table;
mod m20240101_000002_create_remote_tables;

use cosmos_models::initializer::SchemaInitializer;
use sea_orm_migration::{
    prelude::*,
    sea_orm::{ConnectionTrait, DatabaseBackend, Statement},
};
use tracing::debug;

pub use sea_orm_migration::MigratorTrait;

/// Schema of the on-device store
pub struct LocalMigrator;

#[async_trait::async_trait]
impl MigratorTrait for LocalMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_local_table::Migration)]
    }
}

/// Schema of the remote relational store: eight entity tables and the
/// four planet child tables
pub struct RemoteMigrator;

#[async_trait::async_trait]
impl MigratorTrait for RemoteMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000002_create_remote_tables::Migration)]
    }
}

pub(crate) async fn create_tables(
    manager: &SchemaManager<'_>,
    initializers: &[Box<dyn SchemaInitializer>],
) -> Result<(), DbErr> {
    let backend = manager.get_database_backend();
    for initializer in initializers {
        debug!(table = initializer.name(), "create table");
        manager
            .create_table(initializer.to_create_table_stmt(backend))
            .await?;
    }
    Ok(())
}

pub(crate) async fn create_indexes(
    manager: &SchemaManager<'_>,
    initializers: &[Box<dyn SchemaInitializer>],
) -> Result<(), DbErr> {
    for initializer in initializers {
        for stmt in initializer
            .to_create_indexes_stmt(manager.get_database_backend())
            .unwrap_or_default()
        {
            manager.create_index(stmt).await?;
        }
    }
    Ok(())
}

/// Children first so foreign rows never outlive their parents.
pub(crate) async fn drop_tables(
    manager: &SchemaManager<'_>,
    initializers: &[Box<dyn SchemaInitializer>],
) -> Result<(), DbErr> {
    let backend = manager.get_database_backend();
    for initializer in initializers.iter().rev() {
        manager
            .drop_table(initializer.to_drop_table_stmt(backend))
            .await?;
    }
    Ok(())
}

/// Create SQLite triggers that refresh `updated_at` on row updates.
///
/// SQLite column defaults cannot express `ON UPDATE CURRENT_TIMESTAMP`, so each
/// table with an `UpdatedAt` column gets an `AFTER UPDATE` trigger. The `WHEN`
/// clause leaves explicit writes alone and stops the trigger from recursing.
pub(crate) async fn create_sqlite_updated_at_triggers(
    manager: &SchemaManager<'_>,
    initializers: &[Box<dyn SchemaInitializer>],
) -> Result<(), DbErr> {
    if manager.get_database_backend() != DatabaseBackend::Sqlite {
        return Ok(());
    }

    let conn = manager.get_connection();
    for initializer in initializers {
        if !initializer.has_update_col() {
            continue;
        }

        let table_name = initializer.name();
        let trigger_name = format!("trg_{}_updated_at", table_name);
        let sql = format!(
            r#"
            CREATE TRIGGER IF NOT EXISTS "{trigger_name}"
            AFTER UPDATE ON "{table_name}"
            FOR EACH ROW
            WHEN NEW."updated_at" = OLD."updated_at"
            BEGIN
                UPDATE "{table_name}" SET "updated_at" = CURRENT_TIMESTAMP WHERE rowid = NEW.rowid;
            END;
            "#
        );

        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql))
            .await?;
    }

    Ok(())
}
