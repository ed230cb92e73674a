use serde::{Deserialize, Serialize};

use super::shared::{Validate, require_non_blank};
use crate::error::AppError;

/// Request body for admin login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Admin username.
    #[schema(example = "admin")]
    pub username: String,
    /// Admin password.
    #[schema(example = "admin123")]
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("Username", &self.username)?;
        require_non_blank("Password", &self.password)
    }
}

/// Successful login response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Session token to send back in the `X-ADMIN-TOKEN` header.
    /// Replaced by the next successful login.
    #[schema(example = "3f1c2a9e-6d0b-4a57-9a53-8d6f3f2b1c4e")]
    pub token: String,
}
