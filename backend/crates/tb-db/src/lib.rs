pub mod connection;
mod decode;
pub mod error;
pub mod repositories;

pub use connection::pool::{open_in_memory_pool, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::comment_repository::CommentRepository;
pub use repositories::dependency_repository::DependencyRepository;
pub use repositories::epic_repository::EpicRepository;
pub use repositories::project_member_repository::ProjectMemberRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::sprint_repository::SprintRepository;
pub use repositories::status_repository::StatusRepository;
pub use repositories::task_repository::{TaskFilter, TaskRepository};
pub use repositories::time_entry_repository::TimeEntryRepository;
