use super::catalog::{catalog_record, CatalogEntry};
use crate::{idens::catalog::Constellations, record::EntityFamily};
use serde::{Deserialize, Serialize};

/// Constellation with its zodiac-facing attributes.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Constellation {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    /// IAU three-letter abbreviation
    pub abbreviation: String,
    pub hemisphere: String,
    pub area: String,
    pub brightest_star: String,
    pub number_of_stars: String,
}

impl Constellation {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            ..Default::default()
        }
    }
}

catalog_record!(Constellation, EntityFamily::Constellation, Constellations {
    abbreviation => Abbreviation,
    hemisphere => Hemisphere,
    area => Area,
    brightest_star => BrightestStar,
    number_of_stars => NumberOfStars,
});
