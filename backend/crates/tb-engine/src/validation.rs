use crate::{EngineError, Result as EngineErrorResult};

use tb_config::ValidationConfig;

/// Field checks shared by the write handlers.
pub struct Validator<'a> {
    config: &'a ValidationConfig,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a ValidationConfig) -> Self {
        Self { config }
    }

    /// Trims and checks a required single-line field.
    #[track_caller]
    pub fn title(&self, value: &str, field: &str) -> EngineErrorResult<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EngineError::validation(
                format!("{} cannot be empty", field),
                field,
            ));
        }

        if trimmed.chars().count() > self.config.max_title_length {
            return Err(EngineError::validation(
                format!(
                    "{} must not exceed {} characters",
                    field, self.config.max_title_length
                ),
                field,
            ));
        }

        Ok(trimmed.to_string())
    }

    #[track_caller]
    pub fn description(&self, value: Option<&str>, field: &str) -> EngineErrorResult<()> {
        if let Some(text) = value
            && text.chars().count() > self.config.max_description_length
        {
            return Err(EngineError::validation(
                format!(
                    "{} must not exceed {} characters",
                    field, self.config.max_description_length
                ),
                field,
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn story_points(&self, value: Option<i64>) -> EngineErrorResult<()> {
        match value {
            Some(points) if points < 0 => Err(EngineError::validation(
                "story_points cannot be negative",
                "story_points",
            )),
            Some(points) if points > self.config.max_story_points => {
                Err(EngineError::validation(
                    format!(
                        "story_points must not exceed {}",
                        self.config.max_story_points
                    ),
                    "story_points",
                ))
            }
            _ => Ok(()),
        }
    }

    /// Non-negative, finite and within the configured ceiling.
    #[track_caller]
    pub fn hours(&self, value: Option<f64>, field: &str) -> EngineErrorResult<()> {
        let Some(hours) = value else {
            return Ok(());
        };

        if !hours.is_finite() || hours < 0.0 {
            return Err(EngineError::validation(
                format!("{} must be a non-negative number", field),
                field,
            ));
        }

        if hours > self.config.max_hours {
            return Err(EngineError::validation(
                format!("{} must not exceed {}", field, self.config.max_hours),
                field,
            ));
        }

        Ok(())
    }

    /// A logged amount of time: strictly positive.
    #[track_caller]
    pub fn logged_hours(&self, hours: f64) -> EngineErrorResult<()> {
        self.hours(Some(hours), "hours")?;
        if hours == 0.0 {
            return Err(EngineError::validation("hours must be positive", "hours"));
        }

        Ok(())
    }
}
