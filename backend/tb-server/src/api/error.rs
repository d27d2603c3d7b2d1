//! REST API error types
//!
//! Every engine error kind maps to one HTTP status and a JSON body of the
//! form `{"error": {"code", "message", "field"?}}`.

use tb_core::CoreError;
use tb_engine::{EngineError, error_codes};

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const RETRY_MESSAGE: &str = "The board changed while saving; please retry";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Offending input field, for validation and cycle errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 409, an operation the entity's current state does not allow
    #[error("Invalid state: {message} {location}")]
    InvalidState {
        message: String,
        location: ErrorLocation,
    },

    /// 409
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// 422
    #[error("Cycle detected: {message} {location}")]
    CycleDetected {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 503, lost a write race after bounded retries or timed out
    #[error("Unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidState { .. } | Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::CycleDetected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_codes::NOT_FOUND,
            Self::InvalidState { .. } => error_codes::INVALID_STATE,
            Self::Conflict { .. } => error_codes::CONFLICT,
            Self::CycleDetected { .. } => error_codes::CYCLE_DETECTED,
            Self::Validation { .. } => error_codes::VALIDATION_ERROR,
            Self::Unavailable { .. } => error_codes::CONCURRENCY_ERROR,
            Self::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let code = self.code().to_string();
        let body = match self {
            Self::CycleDetected { message, field, .. } | Self::Validation { message, field, .. } => {
                ApiErrorBody {
                    code,
                    message,
                    field,
                }
            }
            Self::NotFound { message, .. }
            | Self::InvalidState { message, .. }
            | Self::Conflict { message, .. }
            | Self::Unavailable { message, .. }
            | Self::Internal { message, .. } => ApiErrorBody {
                code,
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<EngineError> for ApiError {
    #[track_caller]
    fn from(e: EngineError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let field = e.field().map(str::to_string);

        match e {
            EngineError::NotFound { message, .. } => Self::NotFound { message, location },
            EngineError::InvalidState { message, .. } => Self::InvalidState { message, location },
            EngineError::Conflict { message, .. } => Self::Conflict { message, location },
            EngineError::CycleDetected { message, .. } => Self::CycleDetected {
                message,
                field,
                location,
            },
            EngineError::Validation { message, .. } => Self::Validation {
                message,
                field,
                location,
            },
            EngineError::Concurrency { .. } => {
                log::warn!("{}", e);
                Self::Unavailable {
                    message: RETRY_MESSAGE.to_string(),
                    location,
                }
            }
            EngineError::Database { .. } | EngineError::Internal { .. } => {
                // Details stay in the server log
                log::error!("{}", e);
                Self::Internal {
                    message: e.client_message(),
                    location,
                }
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        EngineError::from(e).into()
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<PathRejection> for ApiError {
    #[track_caller]
    fn from(rejection: PathRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
