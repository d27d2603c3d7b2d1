use tb_config::{Config, RetryConfig, ValidationConfig};
use tb_engine::HandlerContext;

use std::time::Duration;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Acting identity for requests without an `X-User-Id` header
    pub default_user_id: Uuid,
    pub request_timeout: Duration,
    pub retry: RetryConfig,
    pub validation: ValidationConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config, default_user_id: Uuid) -> Self {
        Self {
            pool,
            default_user_id,
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            retry: config.retry.clone(),
            validation: config.validation.clone(),
        }
    }

    /// Unscoped context, for project creation and listing.
    pub fn context(&self, user_id: Uuid) -> HandlerContext {
        HandlerContext::new(user_id, self.pool.clone())
            .with_retry_config(self.retry.clone())
            .with_validation(self.validation.clone())
    }

    pub fn project_context(&self, user_id: Uuid, project_id: Uuid) -> HandlerContext {
        self.context(user_id).with_project(project_id)
    }
}
