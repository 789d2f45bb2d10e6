use super::catalog::{catalog_record, CatalogEntry};
use crate::{idens::catalog::Users, record::EntityFamily};
use serde::{Deserialize, Serialize};

/// App user profile, synced with the same shape as the content families.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub zodiac_sign: String,
    /// Free-form date as entered
    pub birth_date: String,
    pub email: String,
}

impl User {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            ..Default::default()
        }
    }
}

catalog_record!(User, EntityFamily::User, Users {
    zodiac_sign => ZodiacSign,
    birth_date => BirthDate,
    email => Email,
});
