pub mod logger;

use cosmos_error::{CXError, CXResult};
use cosmos_models::{settings::Settings, DbManager};
use cosmos_storage::{CXLocalStore, CXRemoteConnector};
use cosmos_sync::SyncService;
use std::sync::Arc;
use tracing::{info, instrument};

pub use logger::Logger;

/// Everything a process needs to talk to both stores.
///
/// Built once by the entry point and passed down explicitly.
pub struct CXContext {
    settings: Settings,
    logger: Logger,
    local: Arc<CXLocalStore>,
    remote: Arc<CXRemoteConnector>,
    sync: SyncService,
}

impl CXContext {
    /// Load settings, install logging and open the stores.
    pub async fn init(config: String) -> CXResult<Self> {
        let settings = Settings::new(config)?;

        // Relative paths (data, logs) resolve under the runtime root.
        apply_runtime_dir(&settings.general.runtime_dir)?;

        let mut logger = Logger::from_settings(&settings.log);
        logger.initialize()?;

        Self::open(settings, logger).await
    }

    /// Open the stores with an already configured logger.
    #[instrument(name = "init-app", skip_all)]
    pub async fn open(settings: Settings, logger: Logger) -> CXResult<Self> {
        let local = CXLocalStore::init(&settings).await?;
        let remote = Arc::new(CXRemoteConnector::new(settings.remote.clone()));
        let sync = SyncService::new(local.clone(), remote.clone());
        info!("Application context initialized successfully.");

        Ok(CXContext {
            settings,
            logger,
            local,
            remote,
            sync,
        })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    #[inline]
    pub fn sync(&self) -> &SyncService {
        &self.sync
    }

    #[inline]
    pub fn remote(&self) -> &CXRemoteConnector {
        &self.remote
    }

    #[inline]
    pub fn local(&self) -> Arc<CXLocalStore> {
        Arc::clone(&self.local)
    }

    /// Close the local store. Remote connections never outlive an operation.
    pub async fn shutdown(&self) -> CXResult<()> {
        self.local.close().await
    }
}

fn apply_runtime_dir(runtime_dir: &str) -> CXResult<()> {
    let dir = runtime_dir.trim();
    if dir.is_empty() || dir == "." {
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| CXError::from(format!("Failed to create runtime_dir {}: {}", dir, e)))?;

    std::env::set_current_dir(dir).map_err(|e| {
        CXError::from(format!(
            "Failed to set current_dir to runtime_dir {}: {}",
            dir, e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmos_models::{
        domain::prelude::{CatalogEntry, Galaxy},
        settings::{Inner, Remote, Sqlite},
    };

    #[tokio::test]
    async fn test_context_wires_both_stores() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = Settings::from_inner(Inner {
            local: Sqlite {
                dir: tmp.path().to_string_lossy().into_owned(),
                ..Sqlite::default()
            },
            remote: Remote {
                url: format!("sqlite:{}/remote.db?mode=rwc", tmp.path().display()),
                ..Remote::default()
            },
            ..Inner::default()
        });
        let ctx = CXContext::open(settings.clone(), Logger::from_settings(&settings.log))
            .await
            .unwrap();
        ctx.remote().migrate().await.unwrap();

        let galaxy = Galaxy::new(CatalogEntry::new("Triangulum", "", 1));
        assert!(ctx.sync().save(&galaxy).await.is_synced());
        let fetched = ctx.sync().fetch_all::<Galaxy>().await.unwrap();
        assert_eq!(fetched.items, vec![galaxy]);

        ctx.shutdown().await.unwrap();
        assert!(ctx.local().get_connection().is_err());
    }
}
