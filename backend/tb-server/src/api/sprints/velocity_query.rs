use serde::Deserialize;

/// Query parameters for the velocity report
#[derive(Debug, Default, Deserialize)]
pub struct VelocityQuery {
    /// Number of most recent completed sprints, 1-50
    pub last_n: Option<usize>,
}
