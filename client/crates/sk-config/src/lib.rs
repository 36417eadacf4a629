mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "SK_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".starter";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "storage";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_MOCK_LATENCY_MS: u64 = 0;
const MAX_MOCK_LATENCY_MS: u64 = 10_000;
