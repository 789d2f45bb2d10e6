//! Capabilities every synced entity family provides to the generic repositories.

use crate::domain::prelude::CatalogEntry;
use cosmos_error::CXError;
use sea_orm::{
    sea_query::{DynIden, Iden, Value},
    QueryResult,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// The eight top-level content families sharing the same CRUD shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityFamily {
    Planet,
    Galaxy,
    Nebula,
    Star,
    Blackhole,
    Constellation,
    /// Secondary planets catalog (`planetss` table)
    PlanetCatalog,
    User,
}

impl EntityFamily {
    pub const ALL: [EntityFamily; 8] = [
        EntityFamily::Planet,
        EntityFamily::Galaxy,
        EntityFamily::Nebula,
        EntityFamily::Star,
        EntityFamily::Blackhole,
        EntityFamily::Constellation,
        EntityFamily::PlanetCatalog,
        EntityFamily::User,
    ];

    /// Key stored in the `family` column of the local store
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityFamily::Planet => "planet",
            EntityFamily::Galaxy => "galaxy",
            EntityFamily::Nebula => "nebula",
            EntityFamily::Star => "star",
            EntityFamily::Blackhole => "blackhole",
            EntityFamily::Constellation => "constellation",
            EntityFamily::PlanetCatalog => "planet_catalog",
            EntityFamily::User => "user",
        }
    }

    /// Name of the family's table in the remote store
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityFamily::Planet => "planets",
            EntityFamily::Galaxy => "galaxies",
            EntityFamily::Nebula => "nebulas",
            EntityFamily::Star => "stars",
            EntityFamily::Blackhole => "blackholes",
            EntityFamily::Constellation => "constellations",
            EntityFamily::PlanetCatalog => "planetss",
            EntityFamily::User => "users",
        }
    }
}

impl fmt::Display for EntityFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityFamily {
    type Err = CXError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        EntityFamily::ALL
            .into_iter()
            .find(|f| f.as_str() == key || f.table_name() == key)
            .ok_or(CXError::UnknownFamily(s.to_string()))
    }
}

/// A row shape in the remote relational store.
pub trait RemoteRecord: Sized {
    /// Remote table name
    fn table() -> DynIden;

    /// Remote columns in write order. The first one is always the primary key.
    fn columns() -> Vec<DynIden>;

    /// Values in `columns()` order
    fn encode(&self) -> Vec<Value>;

    /// Rebuild from a remote row. Never fails: absent or malformed columns
    /// fall back to empty values.
    fn decode(row: &QueryResult) -> Self;
}

/// An entity family handled by the sync service.
pub trait SyncEntity:
    RemoteRecord + Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
    const FAMILY: EntityFamily;

    fn entry(&self) -> &CatalogEntry;

    fn entry_mut(&mut self) -> &mut CatalogEntry;

    #[inline]
    fn id(&self) -> Uuid {
        self.entry().id
    }

    #[inline]
    fn display_order(&self) -> i32 {
        self.entry().display_order
    }
}

/// A row of a one-to-many child table owned by a parent entity.
///
/// Columns start with `id`, the parent id and the position within the
/// parent's collection.
pub trait ChildRecord: Sized + Send + Sync {
    fn table() -> DynIden;

    fn columns() -> Vec<DynIden>;

    /// Values in `columns()` order
    fn encode(&self, parent_id: Uuid, position: i32) -> Vec<Value>;

    fn decode(row: &QueryResult) -> Self;
}

#[inline]
pub fn col_name(column: impl Iden) -> String {
    column.to_string()
}

pub fn read_text(row: &QueryResult, column: impl Iden) -> String {
    row.try_get::<Option<String>>("", &col_name(column))
        .ok()
        .flatten()
        .unwrap_or_default()
}

pub fn read_i32(row: &QueryResult, column: impl Iden) -> i32 {
    let name = col_name(column);
    match row.try_get::<Option<i32>>("", &name) {
        Ok(v) => v.unwrap_or_default(),
        Err(_) => row
            .try_get::<Option<i64>>("", &name)
            .ok()
            .flatten()
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or_default(),
    }
}

pub fn read_bool(row: &QueryResult, column: impl Iden) -> bool {
    row.try_get::<Option<bool>>("", &col_name(column))
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Reads a uuid column stored either natively or as text
pub fn read_uuid(row: &QueryResult, column: impl Iden) -> Uuid {
    let name = col_name(column);
    match row.try_get::<Option<Uuid>>("", &name) {
        Ok(v) => v.unwrap_or_default(),
        Err(_) => row
            .try_get::<Option<String>>("", &name)
            .ok()
            .flatten()
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_parsing() {
        assert_eq!("planet".parse::<EntityFamily>().unwrap(), EntityFamily::Planet);
        assert_eq!("Stars".parse::<EntityFamily>().unwrap(), EntityFamily::Star);
        assert_eq!(
            "planet_catalog".parse::<EntityFamily>().unwrap(),
            EntityFamily::PlanetCatalog
        );
        assert_eq!("galaxies".parse::<EntityFamily>().unwrap(), EntityFamily::Galaxy);
        assert_eq!(
            "planetss".parse::<EntityFamily>().unwrap(),
            EntityFamily::PlanetCatalog
        );
        assert!("comet".parse::<EntityFamily>().is_err());
    }
}
