use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminSession;
use crate::extractors::json::ValidJson;
use crate::models::link::{SocialLink, SocialLinkRequest};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/links",
    tag = "Social Links",
    operation_id = "listLinks",
    summary = "List social links",
    description = "Returns every social link in creation order.",
    responses(
        (status = 200, description = "All social links", body = Vec<SocialLink>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_links(State(state): State<AppState>) -> Json<Vec<SocialLink>> {
    Json(state.portfolio.list_links().await)
}

#[utoipa::path(
    post,
    path = "/links",
    tag = "Social Links",
    operation_id = "createLink",
    summary = "Create a social link",
    description = "Stores the link under a new server-assigned id. Any `id` in the body is ignored.",
    request_body = SocialLinkRequest,
    responses(
        (status = 200, description = "Link created", body = SocialLink),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin token (empty body)"),
    ),
    security(("admin_token" = [])),
)]
#[instrument(skip(state, payload), fields(label = %payload.label))]
pub async fn create_link(
    _admin: AdminSession,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<SocialLinkRequest>,
) -> Json<SocialLink> {
    Json(state.portfolio.create_link(payload.into()).await)
}

#[utoipa::path(
    put,
    path = "/links/{id}",
    tag = "Social Links",
    operation_id = "updateLink",
    summary = "Replace a social link",
    description = "Overwrites the link wholesale. The stored id always comes from the path.",
    params(("id" = String, Path, description = "Link ID")),
    request_body = SocialLinkRequest,
    responses(
        (status = 200, description = "Link replaced", body = SocialLink),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin token (empty body)"),
        (status = 404, description = "Link not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("admin_token" = [])),
)]
#[instrument(skip(state, payload))]
pub async fn update_link(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<SocialLinkRequest>,
) -> Result<Json<SocialLink>, AppError> {
    let link = state.portfolio.update_link(&id, payload.into()).await?;
    Ok(Json(link))
}

#[utoipa::path(
    delete,
    path = "/links/{id}",
    tag = "Social Links",
    operation_id = "deleteLink",
    summary = "Delete a social link",
    description = "Removes the link. Deleting an unknown id also succeeds.",
    params(("id" = String, Path, description = "Link ID")),
    responses(
        (status = 204, description = "Link deleted (or never existed)"),
        (status = 401, description = "Missing or invalid admin token (empty body)"),
    ),
    security(("admin_token" = [])),
)]
#[instrument(skip(state))]
pub async fn delete_link(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    state.portfolio.delete_link(&id).await;
    StatusCode::NO_CONTENT
}
