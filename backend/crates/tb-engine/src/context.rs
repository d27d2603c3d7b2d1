use crate::{EngineError, Result as EngineErrorResult};

use tb_config::{RetryConfig, ValidationConfig};

use std::sync::atomic::{AtomicU64, Ordering};

use sqlx::SqlitePool;
use uuid::Uuid;

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Acting identity, project scope and shared resources for one operation.
#[derive(Clone)]
pub struct HandlerContext {
    /// Correlation id for log lines of this request
    pub request_id: String,
    /// Acting user
    pub user_id: Uuid,
    /// Project every entity touched by the operation must belong to
    pub project_id: Option<Uuid>,
    pub pool: SqlitePool,
    pub retry_config: RetryConfig,
    pub validation: ValidationConfig,
}

impl HandlerContext {
    pub fn new(user_id: Uuid, pool: SqlitePool) -> Self {
        let seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);

        Self {
            request_id: format!("{:08x}", seq),
            user_id,
            project_id: None,
            pool,
            retry_config: RetryConfig::default(),
            validation: ValidationConfig::default(),
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn with_project(mut self, project_id: Uuid) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// The project scope, required by every project-level operation.
    #[track_caller]
    pub fn project(&self) -> EngineErrorResult<Uuid> {
        self.project_id
            .ok_or_else(|| EngineError::validation("operation requires a project scope", "project_id"))
    }

    /// Prefix for structured logging
    pub fn log_prefix(&self) -> String {
        let project = self
            .project_id
            .map(|id| id.to_string()[..8].to_string())
            .unwrap_or_else(|| "-".to_string());

        format!(
            "[req={} user={} project={}]",
            &self.request_id[..8.min(self.request_id.len())],
            &self.user_id.to_string()[..8],
            project
        )
    }
}

impl std::fmt::Debug for HandlerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerContext")
            .field("request_id", &self.request_id)
            .field("user_id", &self.user_id)
            .field("project_id", &self.project_id)
            .finish()
    }
}
