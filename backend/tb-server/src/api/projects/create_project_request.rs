use serde::Deserialize;

/// Request body for creating a project
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// 2-10 uppercase letters or digits, prefix of every task code
    pub key: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}
