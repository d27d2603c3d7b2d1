pub mod comment;
pub mod dependency;
pub mod epic;
pub mod epic_status;
pub mod member_role;
pub mod priority;
pub mod project;
pub mod project_member;
pub mod sprint;
pub mod sprint_status;
pub mod status;
pub mod task;
pub mod task_type;
pub mod time_entry;
