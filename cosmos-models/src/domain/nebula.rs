use super::catalog::{catalog_record, CatalogEntry};
use crate::{idens::catalog::Nebulas, record::EntityFamily};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Nebula {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub nebula_type: String,
    pub size: String,
    pub distance: String,
    pub age: String,
    /// Constellation the nebula is seen in
    pub constellation: String,
}

impl Nebula {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            ..Default::default()
        }
    }
}

catalog_record!(Nebula, EntityFamily::Nebula, Nebulas {
    nebula_type => NebulaType,
    size => Size,
    distance => Distance,
    age => Age,
    constellation => Constellation,
});
