pub mod init;
pub mod storage;
pub mod sync;

use config::ConfigError;
use init::InitContextError;
use sea_orm::DbErr;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use storage::StorageError;
use sync::SyncError;
use thiserror::Error;

pub type CXResult<T, E = CXError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;
pub type SyncResult<T, E = SyncError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum CXError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    SyncError(#[from] SyncError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("Unknown entity family: {0}")]
    UnknownFamily(String),
}

impl From<String> for CXError {
    #[inline]
    fn from(e: String) -> Self {
        CXError::Msg(e)
    }
}

impl From<&str> for CXError {
    #[inline]
    fn from(e: &str) -> Self {
        CXError::Msg(e.to_string())
    }
}

impl From<DbErr> for CXError {
    #[inline]
    fn from(e: DbErr) -> Self {
        CXError::StorageError(StorageError::DBError(e))
    }
}
