// Constants shared across the cosmos crates

/// The default configuration file name for the application.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "cosmos.toml";

/// Environment variable prefix for configuration overrides, e.g. `CX__REMOTE__URL`.
pub const ENV_PREFIX: &str = "CX";

pub const DATA_DIR: &str = "./data";
pub const LOG_DIR: &str = "./logs";
pub const LOG_FILE_NAME: &str = "cosmos.log";
