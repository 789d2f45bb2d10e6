use cosmos_error::CXResult;
use cosmos_models::settings::{CXDbConfig, Sqlite};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{info, instrument, log::LevelFilter};

/// Initialize the on-device SQLite database.
///
/// With `auto_create` the URL carries `mode=rwc`, so a missing file is created.
#[instrument(name = "init_sqlite_db", skip_all)]
pub async fn init_db(config: &Sqlite) -> CXResult<DatabaseConnection> {
    if config.auto_create {
        tokio::fs::create_dir_all(&config.dir).await?;
    }

    let mut opts = ConnectOptions::new(config.to_url());
    opts.connect_timeout(Duration::from_millis(config.timeout))
        .idle_timeout(Duration::from_millis(config.idle_timeout))
        .max_lifetime(Duration::from_millis(config.max_lifetime))
        .max_connections(config.max_connections);

    #[cfg(debug_assertions)]
    {
        opts.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    }
    #[cfg(not(debug_assertions))]
    {
        opts.sqlx_logging(false)
            .sqlx_logging_level(LevelFilter::Off);
    }

    info!(
        "Connecting to SQLite database at: {} (auto_create: {})",
        config.db_path(),
        config.auto_create
    );

    let db = Database::connect(opts).await?;
    // WAL stays off so the file is safe on network filesystems.
    #[cfg(not(debug_assertions))]
    {
        use sea_orm::{ConnectionTrait, DbBackend, Statement};
        for pragma in ["PRAGMA synchronous=NORMAL;", "PRAGMA temp_store=MEMORY;"] {
            let _ = db
                .execute(Statement::from_string(DbBackend::Sqlite, pragma.to_string()))
                .await;
        }
    }
    info!("Successfully connected to SQLite database");

    Ok(db)
}
