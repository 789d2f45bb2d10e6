use super::catalog::{catalog_record, CatalogEntry};
use crate::{idens::catalog::Planetss, record::EntityFamily};
use serde::{Deserialize, Serialize};

/// Entry of the secondary planets catalog, stored in `planetss`.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanetCatalogItem {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub radius: String,
    pub distance: String,
    pub age: String,
    pub moons: String,
}

impl PlanetCatalogItem {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            ..Default::default()
        }
    }
}

catalog_record!(PlanetCatalogItem, EntityFamily::PlanetCatalog, Planetss {
    radius => Radius,
    distance => Distance,
    age => Age,
    moons => Moons,
});
