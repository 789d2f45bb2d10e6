use cosmos_error::{storage::StorageError, sync::SyncError, StorageResult, SyncResult};

/// Result of a write against both stores.
///
/// The local and remote writes are independent, so each side reports on
/// its own.
#[derive(Debug, Default)]
pub enum SyncOutcome {
    #[default]
    Synced,
    LocalFailed(StorageError),
    RemoteFailed(StorageError),
    Failed {
        local: StorageError,
        remote: StorageError,
    },
}

impl SyncOutcome {
    pub fn from_results(local: StorageResult<()>, remote: StorageResult<()>) -> Self {
        match (local, remote) {
            (Ok(()), Ok(())) => SyncOutcome::Synced,
            (Err(local), Ok(())) => SyncOutcome::LocalFailed(local),
            (Ok(()), Err(remote)) => SyncOutcome::RemoteFailed(remote),
            (Err(local), Err(remote)) => SyncOutcome::Failed { local, remote },
        }
    }

    #[inline]
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncOutcome::Synced)
    }

    /// Whether the local store holds the write
    #[inline]
    pub fn local_ok(&self) -> bool {
        matches!(self, SyncOutcome::Synced | SyncOutcome::RemoteFailed(_))
    }

    /// Whether the remote store holds the write
    #[inline]
    pub fn remote_ok(&self) -> bool {
        matches!(self, SyncOutcome::Synced | SyncOutcome::LocalFailed(_))
    }

    pub fn into_result(self) -> SyncResult<()> {
        match self {
            SyncOutcome::Synced => Ok(()),
            SyncOutcome::LocalFailed(e) => Err(SyncError::Local(e)),
            SyncOutcome::RemoteFailed(e) => Err(SyncError::Remote(e)),
            SyncOutcome::Failed { local, remote } => Err(SyncError::Both { local, remote }),
        }
    }
}

/// Which store answered a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    Local,
    Remote,
}

/// Entities returned by a fetch.
///
/// `backfill` reports the local write made after a remote read and is
/// `Synced` when nothing had to be written.
#[derive(Debug)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub source: FetchSource,
    pub backfill: SyncOutcome,
}

impl<T> Fetched<T> {
    #[inline]
    pub fn local(items: Vec<T>) -> Self {
        Self {
            items,
            source: FetchSource::Local,
            backfill: SyncOutcome::Synced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_sides() {
        let outcome = SyncOutcome::from_results(Ok(()), Err(StorageError::StorageUnavailable));
        assert!(outcome.local_ok());
        assert!(!outcome.remote_ok());
        assert!(matches!(outcome.into_result(), Err(SyncError::Remote(_))));

        let outcome = SyncOutcome::from_results(
            Err(StorageError::StorageUnavailable),
            Err(StorageError::Connection("refused".into())),
        );
        assert!(!outcome.local_ok() && !outcome.remote_ok());
        assert!(matches!(outcome, SyncOutcome::Failed { .. }));

        assert!(SyncOutcome::from_results(Ok(()), Ok(())).is_synced());
    }
}
