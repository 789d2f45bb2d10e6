use crate::{
    codec::{
        decode_blob, decode_blob_list, decode_string_list, encode_blob, encode_blob_list,
        encode_string_list, serde_blob, serde_blob_list,
    },
    idens::catalog::CatalogColumn,
    record::{read_bool, read_i32, read_text, read_uuid},
};
use sea_orm::{
    sea_query::{DynIden, IntoIden, Value},
    QueryResult,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields every entity family carries.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Generated on creation, immutable afterwards
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Only ever incremented
    pub views: i32,
    pub is_favorite: bool,
    /// Sort key for listings; neither unique nor contiguous
    pub display_order: i32,
    #[serde(with = "serde_blob")]
    pub image: Vec<u8>,
    #[serde(with = "serde_blob_list")]
    pub gallery: Vec<Vec<u8>>,
    pub random_facts: Vec<String>,
    pub about: String,
    pub video_urls: Vec<String>,
    pub wiki_link: String,
}

impl CatalogEntry {
    /// New entry with a fresh id and zeroed counters
    pub fn new(name: impl Into<String>, description: impl Into<String>, display_order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            display_order,
            ..Default::default()
        }
    }

    pub fn columns() -> Vec<DynIden> {
        CatalogColumn::ALL.iter().map(|c| c.into_iden()).collect()
    }

    /// Values in `CatalogColumn::ALL` order
    pub fn encode(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.views.into(),
            self.is_favorite.into(),
            self.display_order.into(),
            encode_blob(&self.image).into(),
            encode_blob_list(&self.gallery).into(),
            encode_string_list(&self.random_facts).into(),
            self.about.clone().into(),
            encode_string_list(&self.video_urls).into(),
            self.wiki_link.clone().into(),
        ]
    }

    pub fn decode(row: &QueryResult) -> Self {
        Self {
            id: read_uuid(row, CatalogColumn::Id),
            name: read_text(row, CatalogColumn::Name),
            description: read_text(row, CatalogColumn::Description),
            views: read_i32(row, CatalogColumn::Views),
            is_favorite: read_bool(row, CatalogColumn::IsFavorite),
            display_order: read_i32(row, CatalogColumn::DisplayOrder),
            image: decode_blob(&read_text(row, CatalogColumn::Image)),
            gallery: decode_blob_list(&read_text(row, CatalogColumn::Gallery)),
            random_facts: decode_string_list(&read_text(row, CatalogColumn::RandomFacts)),
            about: read_text(row, CatalogColumn::About),
            video_urls: decode_string_list(&read_text(row, CatalogColumn::VideoUrls)),
            wiki_link: read_text(row, CatalogColumn::WikiLink),
        }
    }
}

/// Implements `RemoteRecord` and `SyncEntity` for a struct holding an
/// `entry: CatalogEntry` plus free-text attribute fields, each mapped to a
/// column of the given table iden.
macro_rules! catalog_record {
    ($entity:ty, $family:expr, $table:ident { $($field:ident => $column:ident),* $(,)? }) => {
        impl $crate::record::RemoteRecord for $entity {
            fn table() -> sea_orm::sea_query::DynIden {
                sea_orm::sea_query::IntoIden::into_iden($table::Table)
            }

            fn columns() -> Vec<sea_orm::sea_query::DynIden> {
                #[allow(unused_mut)]
                let mut columns = $crate::domain::catalog::CatalogEntry::columns();
                $(columns.push(sea_orm::sea_query::IntoIden::into_iden($table::$column));)*
                columns
            }

            fn encode(&self) -> Vec<sea_orm::sea_query::Value> {
                #[allow(unused_mut)]
                let mut values = self.entry.encode();
                $(values.push(self.$field.clone().into());)*
                values
            }

            #[allow(clippy::needless_update)]
            fn decode(row: &sea_orm::QueryResult) -> Self {
                Self {
                    entry: $crate::domain::catalog::CatalogEntry::decode(row),
                    $($field: $crate::record::read_text(row, $table::$column),)*
                    ..Default::default()
                }
            }
        }

        impl $crate::record::SyncEntity for $entity {
            const FAMILY: $crate::record::EntityFamily = $family;

            #[inline]
            fn entry(&self) -> &$crate::domain::catalog::CatalogEntry {
                &self.entry
            }

            #[inline]
            fn entry_mut(&mut self) -> &mut $crate::domain::catalog::CatalogEntry {
                &mut self.entry
            }
        }
    };
}

pub(crate) use catalog_record;
