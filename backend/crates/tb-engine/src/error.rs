use crate::error_codes;

use tb_core::CoreError;
use tb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid state: {message} {location}")]
    InvalidState {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cycle detected: {message} {location}")]
    CycleDetected {
        message: String,
        path: Vec<Uuid>,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Concurrent modification: {message} {location}")]
    Concurrency {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl EngineError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn concurrency(message: impl Into<String>) -> Self {
        Self::Concurrency {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Cycle through `path`, written `from -> ... -> from` with short ids.
    #[track_caller]
    pub fn cycle(path: Vec<Uuid>) -> Self {
        let rendered = path
            .iter()
            .map(|id| id.to_string()[..8].to_string())
            .collect::<Vec<_>>()
            .join(" -> ");

        Self::CycleDetected {
            message: format!("dependency would close the cycle {}", rendered),
            path,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_codes::NOT_FOUND,
            Self::InvalidState { .. } => error_codes::INVALID_STATE,
            Self::Conflict { .. } => error_codes::CONFLICT,
            Self::CycleDetected { .. } => error_codes::CYCLE_DETECTED,
            Self::Validation { .. } => error_codes::VALIDATION_ERROR,
            Self::Concurrency { .. } => error_codes::CONCURRENCY_ERROR,
            Self::Database { .. } | Self::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    /// Message without the source location, safe to show to a client.
    pub fn client_message(&self) -> String {
        match self {
            Self::NotFound { message, .. }
            | Self::InvalidState { message, .. }
            | Self::Conflict { message, .. }
            | Self::CycleDetected { message, .. }
            | Self::Validation { message, .. }
            | Self::Concurrency { message, .. }
            | Self::Internal { message, .. } => message.clone(),
            Self::Database { .. } => "database failure".to_string(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::CycleDetected { .. } => Some("to_task_id"),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Concurrency { .. })
    }
}

impl From<DbError> for EngineError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if source.is_busy() {
            return Self::Concurrency {
                message: format!("write lost a race: {}", source),
                location,
            };
        }

        if source.is_unique_violation() {
            return Self::Conflict {
                message: format!("uniqueness violated: {}", source),
                location,
            };
        }

        Self::Database { source, location }
    }
}

impl From<sqlx::Error> for EngineError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::from(DbError::from(source))
    }
}

impl From<CoreError> for EngineError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match source {
            CoreError::InvalidTransition { from, to, .. } => Self::InvalidState {
                message: format!("cannot move sprint from {} to {}", from, to),
                location,
            },
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidTaskType { value, .. } => Self::Validation {
                message: format!("unknown task type '{}'", value),
                field: Some("task_type".into()),
                location,
            },
            CoreError::InvalidPriority { value, .. } => Self::Validation {
                message: format!("unknown priority '{}'", value),
                field: Some("priority".into()),
                location,
            },
            CoreError::InvalidSprintStatus { value, .. } => Self::Validation {
                message: format!("unknown sprint status '{}'", value),
                field: Some("status".into()),
                location,
            },
            CoreError::InvalidEpicStatus { value, .. } => Self::Validation {
                message: format!("unknown epic status '{}'", value),
                field: Some("status".into()),
                location,
            },
            CoreError::InvalidMemberRole { value, .. } => Self::Validation {
                message: format!("unknown member role '{}'", value),
                field: Some("role".into()),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
