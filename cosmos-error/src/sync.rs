use crate::storage::StorageError;
use thiserror::Error;

/// Failure of a sync operation, tagged with the store that failed.
///
/// Reads return it when no store could produce data. Writes report a
/// `SyncOutcome` and convert to this only on request.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("local store: {0}")]
    Local(StorageError),
    #[error("remote store: {0}")]
    Remote(StorageError),
    #[error("local store: {local}; remote store: {remote}")]
    Both {
        local: StorageError,
        remote: StorageError,
    },
}
