use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid task type: {value} {location}")]
    InvalidTaskType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sprint status: {value} {location}")]
    InvalidSprintStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid epic status: {value} {location}")]
    InvalidEpicStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid member role: {value} {location}")]
    InvalidMemberRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid transition: {from} -> {to} {location}")]
    InvalidTransition {
        from: String,
        to: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
