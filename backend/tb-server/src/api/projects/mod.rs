pub mod add_member_request;
pub mod create_project_request;
pub mod project_response;
pub mod projects;
