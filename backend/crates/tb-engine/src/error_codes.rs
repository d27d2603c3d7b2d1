//! Stable machine-readable error codes returned to clients.

/// Unknown task, sprint, epic, status or project
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Out-of-order sprint transition or edit of a closed sprint
pub const INVALID_STATE: &str = "INVALID_STATE";

/// Second active sprint, duplicate edge, or a non-empty column delete
pub const CONFLICT: &str = "CONFLICT";

/// Dependency edge would close a cycle
pub const CYCLE_DETECTED: &str = "CYCLE_DETECTED";

/// Input validation failed
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// Write lost a race after bounded retries
pub const CONCURRENCY_ERROR: &str = "CONCURRENCY_ERROR";

/// Internal server error
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
