#![allow(dead_code)]

use async_trait::async_trait;
use cosmos_error::{storage::StorageError, StorageResult};
use cosmos_models::{
    settings::{Remote, Sqlite},
    ConnectionFactory, DbManager,
};
use cosmos_storage::{CXLocalStore, CXRemoteConnector};
use cosmos_sync::SyncService;
use sea_orm::DatabaseConnection;
use std::sync::{Arc, Once};
use tempfile::TempDir;
use tracing::Level;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Remote store that can never be reached.
#[derive(Debug)]
pub struct UnreachableRemote;

#[async_trait]
impl ConnectionFactory for UnreachableRemote {
    async fn connect(&self) -> StorageResult<DatabaseConnection> {
        Err(StorageError::Connection("connection refused".into()))
    }
}

/// A local store and a remote store, both SQLite files in one temp dir.
pub struct TestEnv {
    pub dir: TempDir,
    pub local: Arc<CXLocalStore>,
    pub remote: Arc<CXRemoteConnector>,
}

impl TestEnv {
    pub async fn new() -> Self {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let remote = Arc::new(CXRemoteConnector::new(Remote {
            url: format!("sqlite:{}/remote.db?mode=rwc", dir.path().display()),
            ..Remote::default()
        }));
        remote.migrate().await.unwrap();
        let local = open_local(&dir, "local.db").await;
        Self { dir, local, remote }
    }

    pub fn service(&self) -> SyncService {
        SyncService::new(self.local.clone(), self.remote.clone())
    }

    /// Same local store, remote store unreachable
    pub fn offline_service(&self) -> SyncService {
        SyncService::new(self.local.clone(), Arc::new(UnreachableRemote))
    }

    /// A second, empty local store backed by the same remote store, as on
    /// a freshly installed device
    pub async fn fresh_device(&self, name: &str) -> (Arc<CXLocalStore>, SyncService) {
        let local = open_local(&self.dir, &format!("{name}.db")).await;
        let service = SyncService::new(local.clone(), self.remote.clone());
        (local, service)
    }

    pub async fn remote_conn(&self) -> DatabaseConnection {
        self.remote.connect().await.unwrap()
    }

    pub fn local_conn(&self) -> DatabaseConnection {
        self.local.get_connection().unwrap()
    }
}

async fn open_local(dir: &TempDir, file: &str) -> Arc<CXLocalStore> {
    CXLocalStore::open(&Sqlite {
        dir: dir.path().to_string_lossy().into_owned(),
        path: file.to_string(),
        ..Sqlite::default()
    })
    .await
    .unwrap()
}
