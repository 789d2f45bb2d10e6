use crate::outcome::{FetchSource, Fetched, SyncOutcome};
use cosmos_error::{storage::StorageError, sync::SyncError, StorageResult, SyncResult};
use cosmos_models::{ConnectionFactory, DbManager};
use cosmos_repository::{LocalRepository, RemoteAggregate, RemoteRepository};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::{future::Future, sync::Arc};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Keeps the on-device store and the remote mirror in agreement.
///
/// The local store answers reads; the remote store is written after it and
/// used to repopulate an empty local store. Every remote operation opens its
/// own connection, runs inside one transaction and closes the connection
/// before returning.
#[derive(Clone)]
pub struct SyncService {
    local: Arc<dyn DbManager>,
    remote: Arc<dyn ConnectionFactory>,
}

impl SyncService {
    pub fn new(local: Arc<dyn DbManager>, remote: Arc<dyn ConnectionFactory>) -> Self {
        Self { local, remote }
    }

    /// Insert locally, then upsert the remote row and rewrite its children.
    ///
    /// Child rows without an id get one first, the same in both stores.
    #[instrument(name = "sync-save", skip_all, fields(family = %T::FAMILY, id = %entity.id()))]
    pub async fn save<T: RemoteAggregate>(&self, entity: &T) -> SyncOutcome {
        let filled = entity.with_child_ids();
        let entity = filled.as_ref().unwrap_or(entity);
        let local = self.save_local(entity).await;
        log_side("local save", &local);

        let remote = self
            .with_remote(|db| async move {
                let txn = db.begin().await?;
                RemoteRepository::upsert(entity, &txn).await?;
                T::purge_children(entity.id(), &txn).await?;
                entity.write_children(&txn).await?;
                txn.commit().await?;
                Ok::<_, StorageError>(())
            })
            .await;
        log_side("remote save", &remote);

        SyncOutcome::from_results(local, remote)
    }

    /// All entities of a family.
    ///
    /// A non-empty local store is authoritative. Otherwise the remote store
    /// is read, and every row it returns is written back to the local store.
    #[instrument(name = "sync-fetch-all", skip_all, fields(family = %T::FAMILY))]
    pub async fn fetch_all<T: RemoteAggregate>(&self) -> SyncResult<Fetched<T>> {
        let local_err = match self.load_local::<T>().await {
            Ok(items) if !items.is_empty() => {
                debug!(count = items.len(), "served from local store");
                return Ok(Fetched::local(items));
            }
            Ok(_) => None,
            Err(e) => {
                error!("❌ local fetch failed, falling back to remote: {e}");
                Some(e)
            }
        };

        match self.read_repair::<T>().await {
            Ok(fetched) => Ok(fetched),
            Err(SyncError::Remote(remote)) => Err(match local_err {
                Some(local) => SyncError::Both { local, remote },
                None => SyncError::Remote(remote),
            }),
            Err(e) => Err(e),
        }
    }

    /// Re-read the remote store and overwrite the local copies, even when
    /// the local store already holds data.
    #[instrument(name = "sync-refresh", skip_all, fields(family = %T::FAMILY))]
    pub async fn refresh_from_remote<T: RemoteAggregate>(&self) -> SyncResult<Fetched<T>> {
        self.read_repair::<T>().await
    }

    /// Read the remote store only, without touching the local store
    #[instrument(name = "sync-fetch-remote", skip_all, fields(family = %T::FAMILY))]
    pub async fn fetch_remote<T: RemoteAggregate>(&self) -> SyncResult<Vec<T>> {
        self.load_remote::<T>().await.map_err(|e| {
            error!("❌ remote fetch failed: {e}");
            SyncError::Remote(e)
        })
    }

    /// One entity by id, as `fetch_all` would return it
    pub async fn find<T: RemoteAggregate>(&self, id: Uuid) -> SyncResult<Option<T>> {
        let fetched = self.fetch_all::<T>().await?;
        Ok(fetched.items.into_iter().find(|item| item.id() == id))
    }

    /// Persist an entity that was changed in place, then rewrite every column
    /// of its remote row.
    #[instrument(name = "sync-update", skip_all, fields(family = %T::FAMILY, id = %entity.id()))]
    pub async fn update<T: RemoteAggregate>(&self, entity: &T) -> SyncOutcome {
        let filled = entity.with_child_ids();
        let entity = filled.as_ref().unwrap_or(entity);
        let local = match self.local.get_connection() {
            Ok(db) => LocalRepository::update(entity, &db).await,
            Err(e) => Err(e),
        };
        log_side("local update", &local);

        let remote = self
            .with_remote(|db| async move {
                let txn = db.begin().await?;
                RemoteRepository::update(entity, &txn).await?;
                T::purge_children(entity.id(), &txn).await?;
                entity.write_children(&txn).await?;
                txn.commit().await?;
                Ok::<_, StorageError>(())
            })
            .await;
        log_side("remote update", &remote);

        SyncOutcome::from_results(local, remote)
    }

    /// Remove locally and, only when that worked, remotely.
    #[instrument(name = "sync-delete", skip_all, fields(family = %T::FAMILY, id = %entity.id()))]
    pub async fn delete<T: RemoteAggregate>(&self, entity: &T) -> SyncOutcome {
        let id = entity.id();
        let local = match self.local.get_connection() {
            Ok(db) => LocalRepository::delete::<T, _>(id, &db).await,
            Err(e) => Err(e),
        };
        if let Err(e) = local {
            error!("❌ local delete failed, remote delete skipped: {e}");
            return SyncOutcome::LocalFailed(e);
        }
        info!("✅ local delete");

        let remote = self
            .with_remote(|db| async move {
                let txn = db.begin().await?;
                T::purge_children(id, &txn).await?;
                let removed = RemoteRepository::delete::<T, _>(id, &txn).await?;
                txn.commit().await?;
                if removed == 0 {
                    warn!("remote row was already gone");
                }
                Ok::<_, StorageError>(())
            })
            .await;
        log_side("remote delete", &remote);

        SyncOutcome::from_results(Ok(()), remote)
    }

    /// Flip the favorite flag and sync the change
    pub async fn toggle_favorite<T: RemoteAggregate>(&self, entity: &mut T) -> SyncOutcome {
        let entry = entity.entry_mut();
        entry.is_favorite = !entry.is_favorite;
        self.update(entity).await
    }

    /// Count one more view and sync the change
    pub async fn increment_view<T: RemoteAggregate>(&self, entity: &mut T) -> SyncOutcome {
        let entry = entity.entry_mut();
        entry.views = entry.views.saturating_add(1);
        self.update(entity).await
    }

    async fn save_local<T: RemoteAggregate>(&self, entity: &T) -> StorageResult<()> {
        let db = self.local.get_connection()?;
        LocalRepository::upsert(entity, &db).await
    }

    async fn load_local<T: RemoteAggregate>(&self) -> StorageResult<Vec<T>> {
        let db = self.local.get_connection()?;
        LocalRepository::find_all(&db).await
    }

    async fn load_remote<T: RemoteAggregate>(&self) -> StorageResult<Vec<T>> {
        self.with_remote(|db| async move {
            let mut items: Vec<T> = RemoteRepository::find_all(&db).await?;
            T::attach_children(&mut items, &db).await?;
            Ok::<_, StorageError>(items)
        })
        .await
    }

    async fn read_repair<T: RemoteAggregate>(&self) -> SyncResult<Fetched<T>> {
        let items = self.load_remote::<T>().await.map_err(|e| {
            error!("❌ remote fetch failed: {e}");
            SyncError::Remote(e)
        })?;

        let backfill = if items.is_empty() {
            SyncOutcome::Synced
        } else {
            let result = match self.local.get_connection() {
                Ok(db) => LocalRepository::upsert_many(&items, &db).await,
                Err(e) => Err(e),
            };
            log_side("local backfill", &result);
            SyncOutcome::from_results(result, Ok(()))
        };

        info!(count = items.len(), "fetched from remote store");
        Ok(Fetched {
            items,
            source: FetchSource::Remote,
            backfill,
        })
    }

    /// Run one logical operation on a fresh remote connection, closing it
    /// whatever the outcome.
    async fn with_remote<R, F, Fut>(&self, op: F) -> StorageResult<R>
    where
        F: FnOnce(DatabaseConnection) -> Fut,
        Fut: Future<Output = StorageResult<R>>,
    {
        let db = self.remote.connect().await?;
        let result = op(db.clone()).await;
        if let Err(e) = db.close().await {
            warn!("❌ failed to close remote connection: {e}");
        }
        result
    }
}

fn log_side(action: &str, result: &StorageResult<()>) {
    match result {
        Ok(()) => info!("✅ {action}"),
        Err(e) => error!("❌ {action} failed: {e}"),
    }
}
