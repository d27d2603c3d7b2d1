use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DATABASE_FILENAME,
    DEFAULT_DATABASE_MAX_CONNECTIONS, MAX_BUSY_TIMEOUT_MS, MAX_DATABASE_MAX_CONNECTIONS,
    MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file, relative to the config directory.
    pub path: String,
    pub max_connections: u32,
    /// How long a writer waits on a locked database before giving up.
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections < MIN_DATABASE_MAX_CONNECTIONS
            || self.max_connections > MAX_DATABASE_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.busy_timeout_ms > MAX_BUSY_TIMEOUT_MS {
            return Err(ConfigError::database(format!(
                "database.busy_timeout_ms must be at most {}, got {}",
                MAX_BUSY_TIMEOUT_MS, self.busy_timeout_ms
            )));
        }

        Ok(())
    }
}
