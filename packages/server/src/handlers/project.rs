use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminSession;
use crate::extractors::json::ValidJson;
use crate::models::project::{Project, ProjectRequest};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/projects",
    tag = "Projects",
    operation_id = "listProjects",
    summary = "List projects",
    description = "Returns every project in creation order.",
    responses(
        (status = 200, description = "All projects", body = Vec<Project>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.portfolio.list_projects().await)
}

#[utoipa::path(
    post,
    path = "/projects",
    tag = "Projects",
    operation_id = "createProject",
    summary = "Create a project",
    description = "Stores the project under a new server-assigned id. Any `id` in the body is ignored.",
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project created", body = Project),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin token (empty body)"),
    ),
    security(("admin_token" = [])),
)]
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_project(
    _admin: AdminSession,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ProjectRequest>,
) -> Json<Project> {
    Json(state.portfolio.create_project(payload.into()).await)
}

#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "Projects",
    operation_id = "updateProject",
    summary = "Replace a project",
    description = "Overwrites the project wholesale. The stored id always comes from the path.",
    params(("id" = String, Path, description = "Project ID")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project replaced", body = Project),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin token (empty body)"),
        (status = 404, description = "Project not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("admin_token" = [])),
)]
#[instrument(skip(state, payload))]
pub async fn update_project(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ProjectRequest>,
) -> Result<Json<Project>, AppError> {
    let project = state.portfolio.update_project(&id, payload.into()).await?;
    Ok(Json(project))
}

#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "Projects",
    operation_id = "deleteProject",
    summary = "Delete a project",
    description = "Removes the project. Deleting an unknown id also succeeds.",
    params(("id" = String, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted (or never existed)"),
        (status = 401, description = "Missing or invalid admin token (empty body)"),
    ),
    security(("admin_token" = [])),
)]
#[instrument(skip(state))]
pub async fn delete_project(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    state.portfolio.delete_project(&id).await;
    StatusCode::NO_CONTENT
}
