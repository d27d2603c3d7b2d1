mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "TB_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".taskboard";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_CONNECTIONS: usize = 256;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 10000;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

const DEFAULT_DATABASE_FILENAME: &str = "taskboard.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 64;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;
const MAX_BUSY_TIMEOUT_MS: u64 = 60000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
