use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS, MAX_MAX_CONNECTIONS, MAX_REQUEST_TIMEOUT_SECS,
    MIN_MAX_CONNECTIONS, MIN_PORT, MIN_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum concurrent in-flight requests
    pub max_connections: usize,
    pub request_timeout_secs: u64,
    /// Acting identity for requests without an `X-User-Id` header.
    pub default_user_id: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            default_user_id: None,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.max_connections < MIN_MAX_CONNECTIONS || self.max_connections > MAX_MAX_CONNECTIONS
        {
            return Err(ConfigError::server(format!(
                "server.max_connections must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::server(format!(
                "server.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        self.default_user()?;
        Ok(())
    }

    pub fn default_user(&self) -> ConfigErrorResult<Option<Uuid>> {
        self.default_user_id
            .as_deref()
            .map(|raw| {
                Uuid::parse_str(raw).map_err(|e| {
                    ConfigError::server(format!("server.default_user_id is not a UUID: {e}"))
                })
            })
            .transpose()
    }
}
