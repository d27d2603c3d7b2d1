use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, RetryConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub retry: RetryConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Loading order:
    /// 1. `TB_CONFIG_DIR` env var, else `./.taskboard/`
    /// 2. Create the directory if missing
    /// 3. Parse `config.toml` if present, else defaults
    /// 4. Apply `TB_*` environment overrides
    ///
    /// Does NOT validate - call `validate()` after `load()`.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.retry.validate()?;
        self.validation.validate()?;

        if let Some(file) = &self.logging.file
            && (file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a file name; use logging.dir for the directory",
            ));
        }

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute log file path, when logging to a file.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} in flight, timeout {}s)",
            self.server.host,
            self.server.port,
            self.server.max_connections,
            self.server.request_timeout_secs
        );
        info!(
            "  database: {} (pool {}, busy timeout {}ms)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_ms
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}ms, backoff={}x",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_ms,
            self.retry.backoff_multiplier
        );
        info!(
            "  validation: title={}, desc={}, points={}, hours={}",
            self.validation.max_title_length,
            self.validation.max_description_length,
            self.validation.max_story_points,
            self.validation.max_hours
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "TB_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );
        Self::apply_env_parse(
            "TB_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );
        Self::apply_env_option_string(
            "TB_SERVER_DEFAULT_USER_ID",
            &mut self.server.default_user_id,
        );

        // Database
        Self::apply_env_string("TB_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "TB_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "TB_DATABASE_BUSY_TIMEOUT_MS",
            &mut self.database.busy_timeout_ms,
        );

        // Logging
        Self::apply_env_parse("TB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TB_LOG_FILE", &mut self.logging.file);

        // Retry
        Self::apply_env_parse("TB_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "TB_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("TB_RETRY_MAX_DELAY_MS", &mut self.retry.max_delay_ms);
        Self::apply_env_parse(
            "TB_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("TB_RETRY_JITTER", &mut self.retry.jitter);

        // Validation
        Self::apply_env_parse(
            "TB_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "TB_VALIDATION_MAX_DESCRIPTION_LENGTH",
            &mut self.validation.max_description_length,
        );
        Self::apply_env_parse(
            "TB_VALIDATION_MAX_STORY_POINTS",
            &mut self.validation.max_story_points,
        );
        Self::apply_env_parse("TB_VALIDATION_MAX_HOURS", &mut self.validation.max_hours);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true" or "1"; anything else is false.
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
