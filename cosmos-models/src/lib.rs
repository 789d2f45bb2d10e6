pub mod codec;
pub mod constants;
pub mod domain;
pub mod entities;
pub mod idens;
pub mod initializer;
pub mod record;
pub mod settings;

use async_trait::async_trait;
use cosmos_error::{init::InitContextError, storage::StorageError, CXResult, StorageResult};
use sea_orm::DatabaseConnection;
use settings::Settings;
use std::sync::Arc;

/// Lifecycle of the on-device store.
///
/// A handle is opened explicitly, handed to whoever needs it and closed
/// when the owner is done with it.
#[async_trait]
pub trait DbManager: Send + Sync + 'static {
    /// Opens the store described by the settings and applies its migrations.
    ///
    /// # Arguments
    /// * `settings` - The application settings
    ///
    /// # Returns
    /// An Arc-wrapped instance of the store
    async fn init(settings: &Settings) -> CXResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Retrieves a database connection from the store's pool.
    ///
    /// # Returns
    /// A SeaORM database connection or an error once the store was closed
    fn get_connection(&self) -> CXResult<DatabaseConnection, StorageError>;

    /// Gracefully closes the store's connections.
    async fn close(&self) -> CXResult<()>;
}

/// Opens connections to the remote relational store.
///
/// Every call yields a fresh connection that the caller owns for one logical
/// operation and closes before returning.
#[async_trait]
pub trait ConnectionFactory: Send + Sync + 'static {
    async fn connect(&self) -> StorageResult<DatabaseConnection>;
}
