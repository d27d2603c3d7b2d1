//! Acting-identity extractor

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// Extracts the acting user from the `X-User-Id` header, falling back to the
/// configured default user when the header is absent.
///
/// A header that is present but not a UUID is rejected rather than silently
/// replaced by the default identity.
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(USER_ID_HEADER) else {
                log::debug!("Using default user ID: {}", state.default_user_id);
                return Ok(UserId(state.default_user_id));
            };

            let raw = header_value
                .to_str()
                .map_err(|_| ApiError::validation("X-User-Id is not valid text", USER_ID_HEADER))?;

            Uuid::parse_str(raw.trim()).map(UserId).map_err(|_| {
                log::warn!("Invalid UUID in X-User-Id header: {}", raw);
                ApiError::validation(format!("X-User-Id '{}' is not a UUID", raw), USER_ID_HEADER)
            })
        }
    }
}
