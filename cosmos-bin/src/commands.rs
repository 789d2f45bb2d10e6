use crate::Command;
use cosmos_common::CXContext;
use cosmos_error::{storage::StorageError, CXResult};
use cosmos_models::{domain::prelude::*, record::EntityFamily};
use cosmos_repository::RemoteAggregate;
use cosmos_sync::{FetchSource, SyncOutcome, SyncService};
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// Binds `$entity` to the concrete type of `$family` and evaluates `$body`.
macro_rules! with_entity {
    ($family:expr, $entity:ident => $body:expr) => {
        match $family {
            EntityFamily::Planet => {
                type $entity = Planet;
                $body
            }
            EntityFamily::Galaxy => {
                type $entity = Galaxy;
                $body
            }
            EntityFamily::Nebula => {
                type $entity = Nebula;
                $body
            }
            EntityFamily::Star => {
                type $entity = Star;
                $body
            }
            EntityFamily::Blackhole => {
                type $entity = Blackhole;
                $body
            }
            EntityFamily::Constellation => {
                type $entity = Constellation;
                $body
            }
            EntityFamily::PlanetCatalog => {
                type $entity = PlanetCatalogItem;
                $body
            }
            EntityFamily::User => {
                type $entity = User;
                $body
            }
        }
    };
}

/// Run one command. `Ok(false)` means some write did not reach both stores.
pub(crate) async fn run(ctx: &CXContext, command: Command) -> CXResult<bool> {
    let sync = ctx.sync();
    match command {
        Command::MigrateRemote => {
            ctx.remote().migrate().await?;
            Ok(true)
        }
        Command::Fetch { family } => with_entity!(family, E => fetch::<E>(sync).await),
        Command::FetchRemote { family } => {
            with_entity!(family, E => fetch_remote::<E>(sync).await)
        }
        Command::Import { family, file } => {
            with_entity!(family, E => import::<E>(sync, &file).await)
        }
        Command::Refresh { family } => with_entity!(family, E => refresh::<E>(sync).await),
        Command::Delete { family, id } => with_entity!(family, E => delete::<E>(sync, id).await),
        Command::Favorite { family, id } => {
            with_entity!(family, E => favorite::<E>(sync, id).await)
        }
    }
}

fn report(outcome: &SyncOutcome) -> bool {
    match outcome {
        SyncOutcome::Synced => true,
        SyncOutcome::LocalFailed(e) => {
            warn!("local store not updated: {e}");
            false
        }
        SyncOutcome::RemoteFailed(e) => {
            warn!("remote store not updated: {e}");
            false
        }
        SyncOutcome::Failed { local, remote } => {
            warn!("neither store updated: local {local}; remote {remote}");
            false
        }
    }
}

async fn fetch<T: RemoteAggregate>(sync: &SyncService) -> CXResult<bool> {
    let fetched = sync.fetch_all::<T>().await?;
    if fetched.source == FetchSource::Remote {
        info!(count = fetched.items.len(), "local store repaired from remote");
    }
    println!("{}", serde_json::to_string_pretty(&fetched.items)?);
    Ok(report(&fetched.backfill))
}

async fn fetch_remote<T: RemoteAggregate>(sync: &SyncService) -> CXResult<bool> {
    let items = sync.fetch_remote::<T>().await?;
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(true)
}

async fn refresh<T: RemoteAggregate>(sync: &SyncService) -> CXResult<bool> {
    let fetched = sync.refresh_from_remote::<T>().await?;
    info!(family = %T::FAMILY, count = fetched.items.len(), "refreshed");
    Ok(report(&fetched.backfill))
}

async fn import<T: RemoteAggregate>(sync: &SyncService, file: &Path) -> CXResult<bool> {
    let raw = tokio::fs::read_to_string(file).await?;
    let entities: Vec<T> = serde_json::from_str(&raw)?;

    let mut synced = 0usize;
    for entity in &entities {
        if report(&sync.save(entity).await) {
            synced += 1;
        }
    }
    info!(
        family = %T::FAMILY,
        total = entities.len(),
        synced,
        "import finished"
    );
    Ok(synced == entities.len())
}

async fn find_or_missing<T: RemoteAggregate>(sync: &SyncService, id: Uuid) -> CXResult<T> {
    sync.find::<T>(id)
        .await?
        .ok_or_else(|| StorageError::EntityNotFound(format!("{} {id}", T::FAMILY)).into())
}

async fn delete<T: RemoteAggregate>(sync: &SyncService, id: Uuid) -> CXResult<bool> {
    let entity = find_or_missing::<T>(sync, id).await?;
    Ok(report(&sync.delete(&entity).await))
}

async fn favorite<T: RemoteAggregate>(sync: &SyncService, id: Uuid) -> CXResult<bool> {
    let mut entity = find_or_missing::<T>(sync, id).await?;
    let outcome = sync.toggle_favorite(&mut entity).await;
    println!(
        "{} {} favorite: {}",
        T::FAMILY,
        id,
        entity.entry().is_favorite
    );
    Ok(report(&outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmos_common::Logger;
    use cosmos_error::CXError;
    use cosmos_models::{
        record::SyncEntity,
        settings::{Inner, Remote, Settings, Sqlite},
    };
    use std::path::PathBuf;
    use tempfile::TempDir;

    async fn context(dir: &TempDir, remote_url: String) -> CXContext {
        let settings = Settings::from_inner(Inner {
            local: Sqlite {
                dir: dir.path().to_string_lossy().into_owned(),
                ..Sqlite::default()
            },
            remote: Remote {
                url: remote_url,
                connect_timeout: 200,
                acquire_timeout: 200,
                ..Remote::default()
            },
            ..Inner::default()
        });
        CXContext::open(settings.clone(), Logger::from_settings(&settings.log))
            .await
            .unwrap()
    }

    async fn migrated_context(dir: &TempDir) -> CXContext {
        let url = format!("sqlite:{}/remote.db?mode=rwc", dir.path().display());
        let ctx = context(dir, url).await;
        assert!(run(&ctx, Command::MigrateRemote).await.unwrap());
        ctx
    }

    fn write_import(dir: &TempDir, name: &str, json: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, json).unwrap();
        path
    }

    #[tokio::test]
    async fn test_import_dispatches_every_family() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = migrated_context(&tmp).await;

        for family in EntityFamily::ALL {
            let json = format!(
                r#"[{{"name": "first {family}", "displayOrder": 2}},
                    {{"name": "second {family}", "displayOrder": 1}}]"#
            );
            let file = write_import(&tmp, &format!("{family}.json"), &json);
            assert!(run(&ctx, Command::Import { family, file }).await.unwrap());
            assert!(run(&ctx, Command::Fetch { family }).await.unwrap());

            let names: Vec<String> = with_entity!(family, E => {
                assert_eq!(E::FAMILY, family);
                ctx.sync()
                    .fetch_remote::<E>()
                    .await
                    .unwrap()
                    .iter()
                    .map(|e| e.entry().name.clone())
                    .collect()
            });
            assert_eq!(names, [format!("second {family}"), format!("first {family}")]);
        }
        ctx.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_favorite_and_delete_by_id() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = migrated_context(&tmp).await;
        let file = write_import(&tmp, "stars.json", r#"[{"name": "Sirius", "starType": "A1V"}]"#);
        assert!(run(&ctx, Command::Import { family: EntityFamily::Star, file })
            .await
            .unwrap());
        let id = ctx.sync().fetch_all::<Star>().await.unwrap().items[0].id();

        let family = EntityFamily::Star;
        assert!(run(&ctx, Command::Favorite { family, id }).await.unwrap());
        let remote = ctx.sync().fetch_remote::<Star>().await.unwrap();
        assert!(remote[0].entry.is_favorite);

        assert!(run(&ctx, Command::Delete { family, id }).await.unwrap());
        assert!(ctx.sync().fetch_remote::<Star>().await.unwrap().is_empty());
        ctx.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_id_is_reported_as_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = migrated_context(&tmp).await;
        let family = EntityFamily::Galaxy;
        let id = Uuid::new_v4();

        assert!(matches!(
            run(&ctx, Command::Delete { family, id }).await,
            Err(CXError::StorageError(StorageError::EntityNotFound(_)))
        ));
        assert!(matches!(
            run(&ctx, Command::Favorite { family, id }).await,
            Err(CXError::StorageError(StorageError::EntityNotFound(_)))
        ));
        ctx.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_partial_sync_is_not_success() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = context(&tmp, "sqlite:/nonexistent-dir/for/sure/remote.db".into()).await;
        let file = write_import(&tmp, "nebulas.json", r#"[{"name": "Crab"}]"#);

        let family = EntityFamily::Nebula;
        assert!(!run(&ctx, Command::Import { family, file }).await.unwrap());
        // the local copy was written and is still served
        let fetched = ctx.sync().fetch_all::<Nebula>().await.unwrap();
        assert_eq!(fetched.items[0].entry.name, "Crab");
        assert!(run(&ctx, Command::FetchRemote { family }).await.is_err());
        ctx.shutdown().await.unwrap();
    }
}
