mod migration;
mod sql;

use async_trait::async_trait;
use cosmos_error::{init::InitContextError, storage::StorageError, CXResult, StorageResult};
use cosmos_models::{
    settings::{Remote, Settings, Sqlite},
    ConnectionFactory, DbManager,
};
use sea_orm::DatabaseConnection;
use std::sync::{Arc, RwLock};
use tracing::{info, instrument, warn};

pub use migration::{LocalMigrator, MigratorTrait, RemoteMigrator};

/// Handle to the on-device store.
///
/// Owns one pooled SQLite connection from `open` until `close`.
pub struct CXLocalStore {
    db_conn: RwLock<Option<DatabaseConnection>>,
}

impl CXLocalStore {
    /// Connect to the SQLite file and apply the local schema.
    #[instrument(name = "open-local-store", skip_all)]
    pub async fn open(config: &Sqlite) -> CXResult<Arc<Self>, InitContextError> {
        if config.path.trim().is_empty() {
            return Err(InitContextError::InvalidConfig(
                "local.path must name a database file".into(),
            ));
        }

        let db = sql::sqlite::init_db(config).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to init SQLite database: {e}"))
        })?;

        LocalMigrator::up(&db, None).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to migrate SQLite database: {e}"))
        })?;

        info!("✅ Local store opened at {}", config.db_path());
        Ok(Arc::new(CXLocalStore {
            db_conn: RwLock::new(Some(db)),
        }))
    }
}

#[async_trait]
impl DbManager for CXLocalStore {
    #[inline]
    async fn init(settings: &Settings) -> CXResult<Arc<Self>, InitContextError> {
        Self::open(&settings.local).await
    }

    #[inline]
    fn get_connection(&self) -> CXResult<DatabaseConnection, StorageError> {
        self.db_conn
            .read()
            .map_err(|_| StorageError::StorageUnavailable)?
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> CXResult<()> {
        let db = match self.db_conn.write() {
            Ok(mut guard) => guard.take(),
            Err(_) => return Err(StorageError::StorageUnavailable.into()),
        };
        if let Some(db) = db {
            info!("🛑 Closing local store connections...");
            db.close().await?;
            info!("✅ Local store closed");
        }
        Ok(())
    }
}

/// Opens short-lived connections to the remote relational store.
#[derive(Debug, Clone)]
pub struct CXRemoteConnector {
    config: Remote,
}

impl CXRemoteConnector {
    pub fn new(config: Remote) -> Self {
        Self { config }
    }

    /// Create the remote tables that do not exist yet.
    #[instrument(name = "migrate-remote-store", skip_all)]
    pub async fn migrate(&self) -> StorageResult<()> {
        let db = self.connect().await?;
        let result = RemoteMigrator::up(&db, None).await;
        if let Err(e) = db.close().await {
            warn!("❌ Failed to close remote connection: {e}");
        }
        result?;
        info!("✅ Remote schema migrated");
        Ok(())
    }
}

#[async_trait]
impl ConnectionFactory for CXRemoteConnector {
    #[inline]
    async fn connect(&self) -> StorageResult<DatabaseConnection> {
        sql::remote::connect(&self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, DbBackend, Statement};

    fn sqlite_config(dir: &std::path::Path) -> Sqlite {
        Sqlite {
            dir: dir.to_string_lossy().into_owned(),
            ..Sqlite::default()
        }
    }

    async fn table_names(db: &DatabaseConnection) -> Vec<String> {
        db.query_all(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name".to_string(),
        ))
        .await
        .unwrap()
        .iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
    }

    #[tokio::test]
    async fn test_open_creates_local_schema_and_close_releases_it() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Sqlite {
            dir: tmp.path().join("nested").to_string_lossy().into_owned(),
            ..Sqlite::default()
        };
        let store = CXLocalStore::open(&config).await.unwrap();
        let conn = store.get_connection().unwrap();
        assert!(table_names(&conn).await.contains(&"local_objects".to_string()));

        store.close().await.unwrap();
        assert!(matches!(
            store.get_connection(),
            Err(StorageError::StorageUnavailable)
        ));
        // closing twice is a no-op
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_file_name_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Sqlite {
            path: " ".into(),
            ..sqlite_config(tmp.path())
        };
        assert!(matches!(
            CXLocalStore::open(&config).await,
            Err(InitContextError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_reopen_keeps_schema() {
        let tmp = tempfile::tempdir().unwrap();
        let config = sqlite_config(tmp.path());
        CXLocalStore::open(&config).await.unwrap().close().await.unwrap();
        let store = CXLocalStore::open(&config).await.unwrap();
        assert!(store.get_connection().is_ok());
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_remote_migration_creates_every_table() {
        let tmp = tempfile::tempdir().unwrap();
        let connector = CXRemoteConnector::new(Remote {
            url: format!("sqlite:{}/remote.db?mode=rwc", tmp.path().display()),
            ..Remote::default()
        });
        connector.migrate().await.unwrap();
        // idempotent
        connector.migrate().await.unwrap();

        let db = connector.connect().await.unwrap();
        let names = table_names(&db).await;
        for table in [
            "planets",
            "galaxies",
            "nebulas",
            "stars",
            "blackholes",
            "constellations",
            "planetss",
            "users",
            "PlanetMyths",
            "PlanetLayers",
            "PlanetInfoCards",
            "PlanetMissions",
        ] {
            assert!(names.contains(&table.to_string()), "missing {table}");
        }
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_remote_reports_connection_error() {
        let connector = CXRemoteConnector::new(Remote {
            url: "sqlite:/nonexistent-dir/for/sure/remote.db".into(),
            connect_timeout: 200,
            acquire_timeout: 200,
            ..Remote::default()
        });
        assert!(matches!(
            connector.connect().await,
            Err(StorageError::Connection(_))
        ));
    }
}
