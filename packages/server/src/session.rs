//! Single-admin session handling.
//!
//! There is one admin account, configured up front, and at most one live session
//! token. Every successful login mints a new token and silently invalidates the
//! previous one; there is no logout and no expiry.

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::AuthConfig;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid username or password")]
pub struct AuthFailure;

#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl From<&AuthConfig> for AdminCredentials {
    fn from(config: &AuthConfig) -> Self {
        Self {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        }
    }
}

pub struct SessionAuthenticator {
    credentials: AdminCredentials,
    current: RwLock<Option<String>>,
}

impl SessionAuthenticator {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self {
            credentials,
            current: RwLock::new(None),
        }
    }

    /// Check the credentials and, on success, start a new session.
    ///
    /// Returns the new token. Any earlier token stops being valid.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthFailure> {
        if username != self.credentials.username || password != self.credentials.password {
            warn!("Rejected admin login");
            return Err(AuthFailure);
        }

        let token = uuid::Uuid::new_v4().to_string();
        let previous = self.current.write().await.replace(token.clone());
        if previous.is_some() {
            info!("Admin logged in, previous session replaced");
        } else {
            info!("Admin logged in");
        }
        Ok(token)
    }

    /// Whether `presented` is the live session token. Absent and empty tokens never are.
    pub async fn is_valid_token(&self, presented: Option<&str>) -> bool {
        let Some(presented) = presented.filter(|t| !t.is_empty()) else {
            return false;
        };
        self.current.read().await.as_deref() == Some(presented)
    }
}
