use crate::api::{
    board::board, comments::comments, dependencies::dependencies, epics::epics,
    projects::projects, sprints::sprints, statuses::statuses, tasks::tasks,
    time_entries::time_entries,
};
use crate::{ApiError, AppState, health};

use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use http::Method;
use log::warn;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
///
/// `max_concurrent_requests` bounds in-flight requests across the server.
pub fn build_router(state: AppState, max_concurrent_requests: usize) -> Router {
    let api = Router::new()
        // Projects and membership
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/projects/{project_id}", get(projects::get_project))
        .route(
            "/projects/{project_id}/members",
            get(projects::list_members).post(projects::add_member),
        )
        // Workflow statuses
        .route(
            "/projects/{project_id}/statuses",
            get(statuses::list_statuses).post(statuses::create_status),
        )
        .route(
            "/projects/{project_id}/statuses/{status_id}",
            delete(statuses::delete_status),
        )
        // Board and analytics
        .route("/projects/{project_id}/board", get(board::get_board))
        .route("/projects/{project_id}/velocity", get(sprints::get_velocity))
        // Tasks
        .route(
            "/projects/{project_id}/tasks",
            get(tasks::list_tasks).post(tasks::create_task),
        )
        .route(
            "/projects/{project_id}/tasks/{task_id}",
            get(tasks::get_task)
                .patch(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route(
            "/projects/{project_id}/tasks/{task_id}/move",
            post(tasks::move_task),
        )
        .route(
            "/projects/{project_id}/tasks/{task_id}/dependencies",
            get(dependencies::list_dependencies),
        )
        .route(
            "/projects/{project_id}/tasks/{task_id}/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/projects/{project_id}/tasks/{task_id}/time-entries",
            get(time_entries::list_time_entries).post(time_entries::log_time),
        )
        // Dependencies
        .route(
            "/projects/{project_id}/dependencies",
            post(dependencies::add_dependency),
        )
        .route(
            "/projects/{project_id}/dependencies/{from_task_id}/{to_task_id}",
            delete(dependencies::remove_dependency),
        )
        // Epics
        .route(
            "/projects/{project_id}/epics",
            get(epics::list_epics).post(epics::create_epic),
        )
        .route(
            "/projects/{project_id}/epics/{epic_id}",
            get(epics::get_epic)
                .patch(epics::update_epic)
                .delete(epics::delete_epic),
        )
        // Sprints
        .route(
            "/projects/{project_id}/sprints",
            get(sprints::list_sprints).post(sprints::create_sprint),
        )
        .route(
            "/projects/{project_id}/sprints/{sprint_id}",
            get(sprints::get_sprint)
                .patch(sprints::update_sprint)
                .delete(sprints::delete_sprint),
        )
        .route(
            "/projects/{project_id}/sprints/{sprint_id}/start",
            post(sprints::start_sprint),
        )
        .route(
            "/projects/{project_id}/sprints/{sprint_id}/complete",
            post(sprints::complete_sprint),
        )
        .route(
            "/projects/{project_id}/sprints/{sprint_id}/summary",
            get(sprints::get_sprint_summary),
        )
        .route(
            "/projects/{project_id}/sprints/{sprint_id}/burndown",
            get(sprints::get_burndown),
        );

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            request_timeout,
        ))
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_headers(Any),
        )
}

/// Fails a request with 503 once it runs past the configured timeout.
async fn request_timeout(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    match tokio::time::timeout(state.request_timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(
                "Request to {} exceeded {}s",
                path,
                state.request_timeout.as_secs()
            );
            ApiError::unavailable("request timed out").into_response()
        }
    }
}
