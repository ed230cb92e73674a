use serde::{Deserialize, Serialize};

use super::shared::{Validate, require_non_blank};
use crate::error::AppError;
use crate::store::{EntityId, Record};

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned identifier.
    #[schema(value_type = String, example = "1")]
    pub id: EntityId,
    #[schema(example = "Realtime Logistics Tracker")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "https://github.com/example/tracker")]
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    #[schema(example = json!(["Rust", "axum"]))]
    pub tags: Option<Vec<String>>,
}

impl Record for Project {
    const KIND: &'static str = "Project";

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

/// Request body for creating or replacing a project.
///
/// Any `id` in the payload is ignored; identity comes from the server or the path.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: String,
    pub description: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Validate for ProjectRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("Title", &self.title)
    }
}

impl From<ProjectRequest> for Project {
    fn from(req: ProjectRequest) -> Self {
        Self {
            id: EntityId::default(),
            title: req.title,
            description: req.description,
            github_url: req.github_url,
            live_url: req.live_url,
            tags: req.tags,
        }
    }
}
