use super::catalog::{catalog_record, CatalogEntry};
use crate::{idens::catalog::Stars, record::EntityFamily};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Star {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    /// Spectral classification
    pub star_type: String,
    pub radius: String,
    pub mass: String,
    pub distance: String,
    pub age: String,
    pub temperature: String,
    pub luminosity: String,
}

impl Star {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            ..Default::default()
        }
    }
}

catalog_record!(Star, EntityFamily::Star, Stars {
    star_type => StarType,
    radius => Radius,
    mass => Mass,
    distance => Distance,
    age => Age,
    temperature => Temperature,
    luminosity => Luminosity,
});
