use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Task,
    Bug,
    Story,
    Feature,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Bug => "bug",
            Self::Story => "story",
            Self::Feature => "feature",
        }
    }
}

impl FromStr for TaskType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "task" => Ok(Self::Task),
            "bug" => Ok(Self::Bug),
            "story" => Ok(Self::Story),
            "feature" => Ok(Self::Feature),
            _ => Err(CoreError::InvalidTaskType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
