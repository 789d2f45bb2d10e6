use cosmos_error::{storage::StorageError, StorageResult};
use cosmos_models::settings::{CXDbConfig, Remote};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{debug, instrument, log::LevelFilter};

/// Open a single-connection pool to the remote store.
#[instrument(name = "connect_remote_db", skip_all, fields(backend = ?config.db_type()))]
pub async fn connect(config: &Remote) -> StorageResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.to_url());
    opts.connect_timeout(Duration::from_millis(config.connect_timeout))
        .acquire_timeout(Duration::from_millis(config.acquire_timeout))
        .min_connections(0)
        .max_connections(1)
        .sqlx_logging(config.sqlx_logging)
        .sqlx_logging_level(LevelFilter::Debug);

    let db = Database::connect(opts)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;
    debug!("remote connection opened");
    Ok(db)
}
