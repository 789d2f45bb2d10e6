use super::catalog::{catalog_record, CatalogEntry};
use crate::{idens::catalog::Galaxies, record::EntityFamily};
use serde::{Deserialize, Serialize};

/// Galaxy catalog item.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Galaxy {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    /// Spiral, elliptical, irregular...
    pub galaxy_type: String,
    pub size: String,
    pub distance: String,
    pub age: String,
    pub mass: String,
    pub number_of_stars: String,
}

impl Galaxy {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            ..Default::default()
        }
    }
}

catalog_record!(Galaxy, EntityFamily::Galaxy, Galaxies {
    galaxy_type => GalaxyType,
    size => Size,
    distance => Distance,
    age => Age,
    mass => Mass,
    number_of_stars => NumberOfStars,
});
