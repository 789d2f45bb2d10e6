use super::catalog::{catalog_record, CatalogEntry};
use crate::{idens::catalog::Blackholes, record::EntityFamily};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Blackhole {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub blackhole_type: String,
    pub mass: String,
    pub size: String,
    pub distance: String,
    pub age: String,
    pub host_galaxy: String,
}

impl Blackhole {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            ..Default::default()
        }
    }
}

catalog_record!(Blackhole, EntityFamily::Blackhole, Blackholes {
    blackhole_type => BlackholeType,
    mass => Mass,
    size => Size,
    distance => Distance,
    age => Age,
    host_galaxy => HostGalaxy,
});
