pub mod analytics;
pub mod board;
pub mod error;
pub mod graph;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;

pub use analytics::burndown::{BurndownMode, BurndownPoint, BurnupPoint, SprintChart, sprint_chart};
pub use analytics::sprint_metrics::SprintMetrics;
pub use analytics::velocity::{SprintVelocity, VelocityReport, velocity};
pub use board::projection::{Board, BoardColumn, BoardFilter, project_board};
pub use board::reorder::{MovePlan, plan_move, renumber};
pub use graph::cycle::{find_cycle_path, would_create_cycle};
pub use models::comment::Comment;
pub use models::dependency::Dependency;
pub use models::epic::Epic;
pub use models::epic_status::EpicStatus;
pub use models::member_role::MemberRole;
pub use models::priority::Priority;
pub use models::project::Project;
pub use models::project_member::ProjectMember;
pub use models::sprint::Sprint;
pub use models::sprint_status::SprintStatus;
pub use models::status::Status;
pub use models::task::Task;
pub use models::task_type::TaskType;
pub use models::time_entry::TimeEntry;
