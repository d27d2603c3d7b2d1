use serde::Deserialize;

/// Query parameters for a sprint chart
#[derive(Debug, Default, Deserialize)]
pub struct BurndownQuery {
    /// `burndown` (default) or `burnup`
    pub mode: Option<String>,
}
