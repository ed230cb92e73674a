use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

/// The single admin account allowed to log in.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the avatar file.
    pub uploads_dir: String,
    /// Upper bound for an uploaded avatar, in bytes.
    pub max_avatar_size: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Populate the about profile, projects and links on startup.
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.cors.allow_origins", vec!["http://localhost:5173"])?
            .set_default("server.cors.max_age", 3600)?
            .set_default("auth.admin_username", "admin")?
            .set_default("auth.admin_password", "admin123")?
            .set_default("storage.uploads_dir", "uploads")?
            .set_default("storage.max_avatar_size", 10 * 1024 * 1024)?
            .set_default("seed.enabled", true)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., PORTFOLIO__AUTH__ADMIN_PASSWORD)
            .add_source(Environment::with_prefix("PORTFOLIO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
