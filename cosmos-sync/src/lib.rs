//! Dual-store sync: an on-device object store mirrored to a remote
//! relational database, for every entity family of the catalog.

mod outcome;
mod service;

pub use outcome::{FetchSource, Fetched, SyncOutcome};
pub use service::SyncService;
