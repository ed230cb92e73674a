use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminSession;
use crate::extractors::json::ValidJson;
use crate::models::about::{About, AboutRequest};
use crate::state::AppState;

/// Slack on top of the avatar size limit for multipart framing.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn photo_body_limit(max_avatar_size: u64) -> DefaultBodyLimit {
    let max = usize::try_from(max_avatar_size).unwrap_or(usize::MAX);
    DefaultBodyLimit::max(max.saturating_add(MULTIPART_OVERHEAD))
}

#[utoipa::path(
    get,
    path = "/about",
    tag = "About",
    operation_id = "getAbout",
    summary = "Get the about profile",
    responses(
        (status = 200, description = "Current about profile", body = About),
    ),
)]
#[instrument(skip(state))]
pub async fn get_about(State(state): State<AppState>) -> Json<About> {
    Json(state.portfolio.about().await)
}

#[utoipa::path(
    put,
    path = "/about",
    tag = "About",
    operation_id = "updateAbout",
    summary = "Replace the about profile",
    description = "Replaces the profile wholesale. Any `id` in the body is ignored.",
    request_body = AboutRequest,
    responses(
        (status = 200, description = "Profile replaced", body = About),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin token (empty body)"),
    ),
    security(("admin_token" = [])),
)]
#[instrument(skip(state, payload))]
pub async fn update_about(
    _admin: AdminSession,
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AboutRequest>,
) -> Json<About> {
    Json(state.portfolio.update_about(payload.into()).await)
}

#[utoipa::path(
    post,
    path = "/about/photo",
    tag = "About",
    operation_id = "uploadPhoto",
    summary = "Upload the avatar",
    description = "Stores the multipart `file` field as the avatar, replacing the previous one. \
        An empty file leaves the profile unchanged.",
    request_body(content_type = "multipart/form-data", description = "Image upload"),
    responses(
        (status = 200, description = "Profile with avatar URL", body = About),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Missing or invalid admin token (empty body)"),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("admin_token" = [])),
)]
#[instrument(skip(state, multipart))]
pub async fn upload_photo(
    _admin: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<About>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue; // Ignore unknown fields.
        }
        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
        upload = Some((file_name, data));
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".into()))?;

    let about = state
        .portfolio
        .save_avatar(&data, file_name.as_deref())
        .await?;

    Ok(Json(about))
}

#[utoipa::path(
    get,
    path = "/about/photo",
    tag = "About",
    operation_id = "getPhoto",
    summary = "Download the avatar",
    responses(
        (status = 200, description = "Avatar image (PNG, GIF, WebP or JPEG)"),
        (status = 404, description = "No avatar uploaded (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_photo(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let avatar = state.portfolio.avatar().await?;

    Ok((
        [
            (header::CONTENT_TYPE, avatar.content_type),
            (header::CACHE_CONTROL, "max-age=60"),
        ],
        avatar.data,
    ))
}
