use serde::Deserialize;

/// Request body for adding a member or changing a member's role
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: String,
    /// `viewer`, `member` or `admin`
    pub role: String,
}
