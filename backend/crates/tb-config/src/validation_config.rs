use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_STORY_POINTS: i64 = 0;
pub const MAX_STORY_POINTS: i64 = 1000;
pub const DEFAULT_MAX_STORY_POINTS: i64 = 100;

pub const MAX_HOURS: f64 = 10000.0;
pub const DEFAULT_MAX_HOURS: f64 = 1000.0;

/// Field limits applied to incoming writes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub max_story_points: i64,
    /// Upper bound for estimated hours and a single time entry
    pub max_hours: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_story_points: DEFAULT_MAX_STORY_POINTS,
            max_hours: DEFAULT_MAX_HOURS,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length > MAX_DESCRIPTION_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_description_length must be at most {}, got {}",
                MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        if self.max_story_points < MIN_STORY_POINTS || self.max_story_points > MAX_STORY_POINTS {
            return Err(ConfigError::config(format!(
                "validation.max_story_points must be {}-{}, got {}",
                MIN_STORY_POINTS, MAX_STORY_POINTS, self.max_story_points
            )));
        }

        if !(self.max_hours > 0.0 && self.max_hours <= MAX_HOURS) {
            return Err(ConfigError::config(format!(
                "validation.max_hours must be in (0, {}], got {}",
                MAX_HOURS, self.max_hours
            )));
        }

        Ok(())
    }
}
