use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::ValidJson;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::state::AppState;

/// Handle admin login.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Log in as the admin",
    description = "Checks the configured admin credentials and starts a new session. \
        The returned token replaces any previously issued one.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Invalid username or password (empty body)"),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = state
        .sessions
        .login(&payload.username, &payload.password)
        .await
        .map_err(|_| AppError::InvalidCredentials)?;

    Ok(Json(LoginResponse { token }))
}
