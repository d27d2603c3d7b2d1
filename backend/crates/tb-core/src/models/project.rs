use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_KEY_LENGTH: usize = 2;
pub const MAX_KEY_LENGTH: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub key: String,
    pub name: String,
    pub description: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl Project {
    pub fn new(key: String, name: String, description: Option<String>, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            key,
            name,
            description,
            created_at: now,
            updated_at: now,
            created_by,
        }
    }

    /// Keys prefix task codes, so they are short uppercase alphanumerics.
    #[track_caller]
    pub fn validate_key(key: &str) -> CoreResult<()> {
        let len = key.chars().count();
        let well_formed = (MIN_KEY_LENGTH..=MAX_KEY_LENGTH).contains(&len)
            && key
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            && key.chars().next().is_some_and(|c| c.is_ascii_uppercase());

        if !well_formed {
            return Err(CoreError::Validation {
                message: format!(
                    "Project key must be {MIN_KEY_LENGTH}-{MAX_KEY_LENGTH} uppercase letters or digits, starting with a letter"
                ),
                field: Some("key".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    pub fn task_code(&self, number: i64) -> String {
        format!("{}-{}", self.key, number)
    }
}
