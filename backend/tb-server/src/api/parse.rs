//! Parsing helpers shared by request DTOs

use crate::{ApiError, ApiResult};

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Parses a path or body id, naming the offending field on failure.
#[track_caller]
pub fn parse_uuid(raw: &str, field: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ApiError::validation(format!("Invalid {}: '{}'", field, raw), field))
}

#[track_caller]
pub fn parse_optional_uuid(raw: Option<&str>, field: &str) -> ApiResult<Option<Uuid>> {
    raw.map(|raw| parse_uuid(raw, field)).transpose()
}

/// Patch semantics for nullable fields: an absent key stays `None`, an
/// explicit `null` becomes `Some(None)`.
///
/// Use with `#[serde(default, deserialize_with = "deserialize_some")]`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// `parse_optional_uuid` for a patch field: keeps the absent/null/value split.
#[track_caller]
pub fn parse_patch_uuid(raw: Option<Option<String>>, field: &str) -> ApiResult<Option<Option<Uuid>>> {
    match raw {
        None => Ok(None),
        Some(None) => Ok(Some(None)),
        Some(Some(raw)) => parse_uuid(&raw, field).map(|id| Some(Some(id))),
    }
}
