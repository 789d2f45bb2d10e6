use cosmos_error::storage::StorageError;
use cosmos_models::{
    domain::prelude::*,
    settings::{Remote, Sqlite},
    ConnectionFactory, DbManager,
};
use cosmos_repository::{
    LocalRepository, PlanetChildRepository, RemoteAggregate, RemoteRepository,
};
use cosmos_storage::{CXLocalStore, CXRemoteConnector};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

async fn local_db(tmp: &TempDir) -> DatabaseConnection {
    let store = CXLocalStore::open(&Sqlite {
        dir: tmp.path().to_string_lossy().into_owned(),
        ..Sqlite::default()
    })
    .await
    .unwrap();
    store.get_connection().unwrap()
}

async fn remote_db(tmp: &TempDir) -> DatabaseConnection {
    let connector = CXRemoteConnector::new(Remote {
        url: format!("sqlite:{}/remote.db?mode=rwc", tmp.path().display()),
        ..Remote::default()
    });
    connector.migrate().await.unwrap();
    connector.connect().await.unwrap()
}

fn galaxy(name: &str, order: i32) -> Galaxy {
    let mut galaxy = Galaxy::new(CatalogEntry::new(name, format!("{name} galaxy"), order));
    galaxy.galaxy_type = "spiral".into();
    galaxy
}

#[tokio::test]
async fn test_local_upsert_replaces_by_id() {
    let tmp = tempfile::tempdir().unwrap();
    let db = local_db(&tmp).await;

    let mut andromeda = galaxy("Andromeda", 2);
    LocalRepository::upsert(&andromeda, &db).await.unwrap();
    andromeda.entry.views = 7;
    LocalRepository::upsert(&andromeda, &db).await.unwrap();
    LocalRepository::upsert(&galaxy("Milky Way", 1), &db).await.unwrap();

    let all: Vec<Galaxy> = LocalRepository::find_all(&db).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].entry.name, "Milky Way");
    assert_eq!(all[1], andromeda);
    assert_eq!(LocalRepository::count::<Galaxy, _>(&db).await.unwrap(), 2);
    // families do not see each other's rows
    assert_eq!(LocalRepository::count::<Nebula, _>(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_local_update_missing_entity_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let db = local_db(&tmp).await;

    let result = LocalRepository::update(&galaxy("Ghost", 0), &db).await;
    assert!(matches!(result, Err(StorageError::EntityNotFound(_))));
}

#[tokio::test]
async fn test_local_upsert_many_and_delete() {
    let tmp = tempfile::tempdir().unwrap();
    let db = local_db(&tmp).await;

    let galaxies: Vec<Galaxy> = (0..150).map(|i| galaxy(&format!("G{i}"), i)).collect();
    LocalRepository::upsert_many(&galaxies, &db).await.unwrap();
    assert_eq!(LocalRepository::count::<Galaxy, _>(&db).await.unwrap(), 150);

    let removed = LocalRepository::delete::<Galaxy, _>(galaxies[3].entry.id, &db)
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(LocalRepository::count::<Galaxy, _>(&db).await.unwrap(), 149);
}

#[tokio::test]
async fn test_remote_round_trip_keeps_binary_and_lists() {
    let tmp = tempfile::tempdir().unwrap();
    let db = remote_db(&tmp).await;

    let mut nebula = Nebula::new(CatalogEntry::new("Orion", "Stellar nursery", 3));
    nebula.entry.image = vec![0, 1, 2, 254, 255];
    nebula.entry.gallery = vec![b"one".to_vec(), Vec::new(), vec![9; 40]];
    nebula.entry.random_facts = vec!["Visible, barely".into(), "\"M42\"".into()];
    nebula.entry.video_urls = vec!["https://example.org/orion".into()];
    nebula.nebula_type = "emission".into();

    RemoteRepository::upsert(&nebula, &db).await.unwrap();
    let fetched: Vec<Nebula> = RemoteRepository::find_all(&db).await.unwrap();
    assert_eq!(fetched, vec![nebula.clone()]);

    nebula.entry.is_favorite = true;
    RemoteRepository::update(&nebula, &db).await.unwrap();
    RemoteRepository::upsert(&nebula, &db).await.unwrap();
    let fetched: Vec<Nebula> = RemoteRepository::find_all(&db).await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert!(fetched[0].entry.is_favorite);

    assert_eq!(
        RemoteRepository::delete::<Nebula, _>(nebula.entry.id, &db)
            .await
            .unwrap(),
        1
    );
    assert!(matches!(
        RemoteRepository::update(&nebula, &db).await,
        Err(StorageError::EntityNotFound(_))
    ));
}

#[tokio::test]
async fn test_remote_rows_come_back_in_display_order() {
    let tmp = tempfile::tempdir().unwrap();
    let db = remote_db(&tmp).await;

    for (name, order) in [("Sirius", 5), ("Vega", 1), ("Rigel", 3)] {
        let star = Star::new(CatalogEntry::new(name, "", order));
        RemoteRepository::upsert(&star, &db).await.unwrap();
    }
    let names: Vec<String> = RemoteRepository::find_all::<Star, _>(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.entry.name)
        .collect();
    assert_eq!(names, ["Vega", "Rigel", "Sirius"]);
}

#[tokio::test]
async fn test_planet_children_keep_order_and_purge() {
    let tmp = tempfile::tempdir().unwrap();
    let db = remote_db(&tmp).await;

    let mut mars = Planet::new(CatalogEntry::new("Mars", "", 4));
    mars.myths = vec![
        PlanetMyth {
            culture: "Roman".into(),
            god_name: "Mars".into(),
            ..Default::default()
        },
        PlanetMyth {
            culture: "Greek".into(),
            god_name: "Ares".into(),
            ..Default::default()
        },
    ];
    mars.layers = vec![PlanetLayer {
        name: "Crust".into(),
        color_start: "#aa3300".into(),
        ..Default::default()
    }];
    let venus = Planet::new(CatalogEntry::new("Venus", "", 2));

    for planet in [&mars, &venus] {
        RemoteRepository::upsert(planet, &db).await.unwrap();
        planet.write_children(&db).await.unwrap();
    }

    let mut planets: Vec<Planet> = RemoteRepository::find_all(&db).await.unwrap();
    Planet::attach_children(&mut planets, &db).await.unwrap();
    assert_eq!(planets[0].entry.name, "Venus");
    assert!(planets[0].myths.is_empty());
    let cultures: Vec<&str> = planets[1].myths.iter().map(|m| m.culture.as_str()).collect();
    assert_eq!(cultures, ["Roman", "Greek"]);
    assert_eq!(planets[1].layers.len(), 1);
    assert_eq!(planets[1].layers[0].color_start, "#aa3300");

    let removed = PlanetChildRepository::purge(mars.entry.id, &db).await.unwrap();
    assert_eq!(removed, 3);
    Planet::attach_children(&mut planets, &db).await.unwrap();
    assert!(planets[1].myths.is_empty());
    assert!(planets[1].layers.is_empty());
}
