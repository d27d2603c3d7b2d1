pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    board::{board::get_board, board_query::BoardQuery, board_response::BoardResponse},
    comments::{
        comment_response::{CommentListResponse, CommentResponse},
        comments::{add_comment, list_comments},
        create_comment_request::CreateCommentRequest,
    },
    delete_response::DeleteResponse,
    dependencies::{
        create_dependency_request::CreateDependencyRequest,
        dependencies::{add_dependency, list_dependencies, remove_dependency},
        dependency_response::{DependencyListResponse, DependencyResponse, RemoveDependencyResponse},
    },
    epics::{
        create_epic_request::CreateEpicRequest,
        epic_response::{EpicListResponse, EpicResponse},
        epics::{create_epic, delete_epic, get_epic, list_epics, update_epic},
        update_epic_request::UpdateEpicRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::{USER_ID_HEADER, UserId},
    projects::{
        add_member_request::AddMemberRequest,
        create_project_request::CreateProjectRequest,
        project_response::{MemberListResponse, MemberResponse, ProjectListResponse, ProjectResponse},
        projects::{add_member, create_project, get_project, list_members, list_projects},
    },
    sprints::{
        burndown_query::BurndownQuery,
        create_sprint_request::CreateSprintRequest,
        sprint_response::{
            BurndownResponse, SprintListResponse, SprintResponse, SprintSummaryResponse,
            VelocityResponse,
        },
        sprints::{
            complete_sprint, create_sprint, delete_sprint, get_burndown, get_sprint,
            get_sprint_summary, get_velocity, list_sprints, start_sprint, update_sprint,
        },
        update_sprint_request::UpdateSprintRequest,
        velocity_query::VelocityQuery,
    },
    statuses::{
        create_status_request::CreateStatusRequest,
        status_response::{StatusListResponse, StatusResponse},
        statuses::{create_status, delete_status, list_statuses},
    },
    tasks::{
        create_task_request::CreateTaskRequest,
        list_tasks_query::ListTasksQuery,
        move_task_request::MoveTaskRequest,
        task_response::{TaskListResponse, TaskResponse},
        tasks::{create_task, delete_task, get_task, list_tasks, move_task, update_task},
        update_task_request::UpdateTaskRequest,
    },
    time_entries::{
        log_time_request::LogTimeRequest,
        time_entries::{list_time_entries, log_time},
        time_entry_response::{TimeEntryListResponse, TimeEntryResponse},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
