pub mod comment_repository;
pub mod dependency_repository;
pub mod epic_repository;
pub mod project_member_repository;
pub mod project_repository;
pub mod sprint_repository;
pub mod status_repository;
pub mod task_repository;
pub mod time_entry_repository;
