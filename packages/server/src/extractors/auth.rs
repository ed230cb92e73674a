use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the admin session token.
pub const ADMIN_TOKEN_HEADER: &str = "X-ADMIN-TOKEN";

/// Proof that the request carries the live admin session token.
///
/// Add this as the first handler parameter to protect a route. It is resolved
/// before the request body is read, so rejected requests never reach the store.
#[derive(Debug)]
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::TokenMissing)?;

        if state.sessions.is_valid_token(Some(token)).await {
            Ok(AdminSession)
        } else {
            Err(AppError::TokenInvalid)
        }
    }
}
