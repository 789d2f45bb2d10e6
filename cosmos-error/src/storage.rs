use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(#[from] sea_orm::DbErr),

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// Remote connection could not be opened
    #[error("connection error: {0}")]
    Connection(String),

    /// A stored payload could not be converted to or from its domain type
    #[error("codec error: {0}")]
    Codec(String),
}

impl From<serde_json::Error> for StorageError {
    #[inline]
    fn from(e: serde_json::Error) -> Self {
        StorageError::Codec(e.to_string())
    }
}
