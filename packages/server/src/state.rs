use std::sync::Arc;

use common::storage::filesystem::FilesystemSlotStore;
use tracing::info;

use crate::config::AppConfig;
use crate::seed;
use crate::session::{AdminCredentials, SessionAuthenticator};
use crate::store::{AVATAR_PREFIX, Portfolio};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub portfolio: Arc<Portfolio>,
    pub sessions: Arc<SessionAuthenticator>,
}

impl AppState {
    /// Build the state described by `config`, seeding default content when enabled.
    pub async fn from_config(config: AppConfig) -> Self {
        let avatars = FilesystemSlotStore::new(
            &config.storage.uploads_dir,
            AVATAR_PREFIX,
            config.storage.max_avatar_size,
        );
        let portfolio = Portfolio::in_memory(Arc::new(avatars));

        if config.seed.enabled {
            seed::seed_defaults(&portfolio).await;
        } else {
            info!("Seeding disabled, starting with an empty portfolio");
        }

        let sessions = SessionAuthenticator::new(AdminCredentials::from(&config.auth));

        Self {
            config,
            portfolio: Arc::new(portfolio),
            sessions: Arc::new(sessions),
        }
    }
}
