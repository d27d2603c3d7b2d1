use tb_core::{Project, ProjectMember};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member: ProjectMember,
}

#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<ProjectMember>,
}
