use crate::MemberRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectMember {
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

impl ProjectMember {
    pub fn new(project_id: Uuid, user_id: Uuid, role: MemberRole) -> Self {
        Self {
            project_id,
            user_id,
            role,
            joined_at: Utc::now(),
        }
    }
}
