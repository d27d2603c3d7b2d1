pub mod burndown_query;
pub mod create_sprint_request;
pub mod sprint_response;
pub mod sprints;
pub mod update_sprint_request;
pub mod velocity_query;
