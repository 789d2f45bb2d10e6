use thiserror::Error;

/// Error type for bootstrap operations (opening stores, running migrations)
#[derive(Error, Debug)]
pub enum InitContextError {
    /// Returned when a configuration value cannot be used
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Returned when a primitive error occurs
    #[error("primitive error: {0}")]
    Primitive(String),
}
