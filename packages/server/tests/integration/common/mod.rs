use std::net::SocketAddr;

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tempfile::TempDir;

use server::config::{AppConfig, AuthConfig, CorsConfig, SeedConfig, ServerConfig, StorageConfig};
use server::state::AppState;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "test-password";
pub const TOKEN_HEADER: &str = "X-ADMIN-TOKEN";

pub mod routes {
    pub const LOGIN: &str = "/api/auth/login";
    pub const ABOUT: &str = "/api/about";
    pub const PHOTO: &str = "/api/about/photo";
    pub const PROJECTS: &str = "/api/projects";
    pub const LINKS: &str = "/api/links";

    pub fn project(id: &str) -> String {
        format!("/api/projects/{id}")
    }

    pub fn link(id: &str) -> String {
        format!("/api/links/{id}")
    }
}

/// A running test server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    /// Holds the uploads directory; removed when the app is dropped.
    pub uploads: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    pub headers: HeaderMap,
    /// Raw response body.
    pub bytes: Vec<u8>,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    /// Spawn a server with the default seed data.
    pub async fn spawn() -> Self {
        Self::spawn_with(true, 1024 * 1024).await
    }

    /// Spawn a server with no projects or links.
    pub async fn spawn_empty() -> Self {
        Self::spawn_with(false, 1024 * 1024).await
    }

    pub async fn spawn_with(seed: bool, max_avatar_size: u64) -> Self {
        let uploads = tempfile::tempdir().expect("Failed to create uploads dir");

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            auth: AuthConfig {
                admin_username: ADMIN_USERNAME.to_string(),
                admin_password: ADMIN_PASSWORD.to_string(),
            },
            storage: StorageConfig {
                uploads_dir: uploads.path().join("uploads").to_string_lossy().into_owned(),
                max_avatar_size,
            },
            seed: SeedConfig { enabled: seed },
        };

        let state = AppState::from_config(app_config).await;
        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            uploads,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn send(&self, req: RequestBuilder, token: Option<&str>) -> TestResponse {
        let req = match token {
            Some(token) => req.header(TOKEN_HEADER, token),
            None => req,
        };
        let res = req.send().await.expect("Failed to send request");
        TestResponse::from_response(res).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(self.client.get(self.url(path)), None).await
    }

    pub async fn post_without_token(&self, path: &str, body: &Value) -> TestResponse {
        self.send(self.client.post(self.url(path)).json(body), None)
            .await
    }

    pub async fn post_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        self.send(self.client.post(self.url(path)).json(body), Some(token))
            .await
    }

    pub async fn put_without_token(&self, path: &str, body: &Value) -> TestResponse {
        self.send(self.client.put(self.url(path)).json(body), None)
            .await
    }

    pub async fn put_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        self.send(self.client.put(self.url(path)).json(body), Some(token))
            .await
    }

    pub async fn delete_without_token(&self, path: &str) -> TestResponse {
        self.send(self.client.delete(self.url(path)), None).await
    }

    pub async fn delete_with_token(&self, path: &str, token: &str) -> TestResponse {
        self.send(self.client.delete(self.url(path)), Some(token))
            .await
    }

    pub async fn upload(
        &self,
        path: &str,
        file_name: &str,
        file_bytes: Vec<u8>,
        token: Option<&str>,
    ) -> TestResponse {
        let part = reqwest::multipart::Part::bytes(file_bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        self.send(self.client.post(self.url(path)).multipart(form), token)
            .await
    }

    /// Log in as the admin, returning the session token.
    pub async fn login(&self) -> String {
        let res = self
            .post_without_token(
                routes::LOGIN,
                &serde_json::json!({
                    "username": ADMIN_USERNAME,
                    "password": ADMIN_PASSWORD,
                }),
            )
            .await;
        assert_eq!(res.status, 200, "Login failed: {}", res.text);

        res.body["token"]
            .as_str()
            .expect("Login response should contain a token")
            .to_string()
    }

    /// Create a project via the API and return its `id`.
    pub async fn create_project(&self, token: &str, title: &str) -> String {
        let res = self
            .post_with_token(
                routes::PROJECTS,
                &serde_json::json!({
                    "title": title,
                    "description": "Built for tests",
                    "tags": ["Rust"],
                }),
                token,
            )
            .await;
        assert_eq!(res.status, 200, "create_project failed: {}", res.text);
        res.id()
    }

    /// Create a social link via the API and return its `id`.
    pub async fn create_link(&self, token: &str, label: &str) -> String {
        let res = self
            .post_with_token(
                routes::LINKS,
                &serde_json::json!({
                    "label": label,
                    "url": "https://example.com",
                    "icon": "globe",
                }),
                token,
            )
            .await;
        assert_eq!(res.status, 200, "create_link failed: {}", res.text);
        res.id()
    }

    /// Names of files currently occupying the avatar slot.
    pub fn avatar_files(&self) -> Vec<String> {
        let dir = self.uploads.path().join("uploads");
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("avatar"))
            .collect();
        names.sort();
        names
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let bytes = res.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self {
            status,
            headers,
            bytes,
            text,
            body,
        }
    }

    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .expect("response body should contain a string 'id'")
            .to_string()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Ids of the entities in a JSON array body, in response order.
    pub fn ids(&self) -> Vec<String> {
        self.body
            .as_array()
            .expect("response body should be an array")
            .iter()
            .map(|item| item["id"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
