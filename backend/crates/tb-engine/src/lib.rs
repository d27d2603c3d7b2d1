pub mod context;
pub mod db_ops;
pub mod error;
pub mod error_codes;
pub mod handlers;
pub mod retry;
pub mod validation;


pub use context::HandlerContext;
pub use db_ops::{db_read, db_write};
pub use error::{EngineError, Result};
pub use retry::{IsRetryable, with_retry};

pub use handlers::analytics::{
    DEFAULT_VELOCITY_WINDOW, MAX_VELOCITY_WINDOW, get_burndown, get_burndown_as_of, get_velocity,
};
pub use handlers::board::get_board;
pub use handlers::comment::{add_comment, list_comments};
pub use handlers::dependency::{
    TaskDependencies, add_dependency, list_dependencies, remove_dependency,
};
pub use handlers::epic::{
    CreateEpicInput, UpdateEpicInput, create_epic, delete_epic, get_epic, list_epics, update_epic,
};
pub use handlers::move_task::{MoveTarget, move_task};
pub use handlers::project::{
    AddMemberInput, CreateProjectInput, add_member, create_project, get_project, list_members,
    list_projects,
};
pub use handlers::sprint::{
    CreateSprintInput, UpdateSprintInput, complete_sprint, create_sprint, delete_sprint,
    get_sprint, get_sprint_summary, get_sprint_summary_as_of, list_sprints, start_sprint,
    update_sprint,
};
pub use handlers::status::{CreateStatusInput, create_status, delete_status, list_statuses};
pub use handlers::task::{
    CreateTaskInput, UpdateTaskInput, create_task, delete_task, get_task, list_tasks, update_task,
};
pub use handlers::time_entry::{LogTimeInput, list_time_entries, log_time};
