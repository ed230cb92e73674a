use serde::{Deserialize, Serialize};

use super::shared::{Validate, require_non_blank};
use crate::error::AppError;

/// Fixed identity of the about profile.
pub const ABOUT_ID: &str = "about";

/// The portfolio owner's profile. Exactly one exists at any time.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct About {
    /// Always `about`.
    #[schema(example = "about")]
    pub id: String,
    #[schema(example = "Jane Doe · Software Developer")]
    pub headline: String,
    pub summary: String,
    #[schema(example = "Lisbon, Portugal")]
    pub location: String,
    /// Where the avatar can be fetched, once one has been uploaded.
    #[schema(example = "/api/about/photo")]
    pub avatar_url: Option<String>,
}

impl Default for About {
    fn default() -> Self {
        Self {
            id: ABOUT_ID.to_string(),
            headline: String::new(),
            summary: String::new(),
            location: String::new(),
            avatar_url: None,
        }
    }
}

/// Request body replacing the about profile wholesale.
///
/// Any `id` in the payload is ignored.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutRequest {
    pub headline: String,
    pub summary: String,
    pub location: String,
    pub avatar_url: Option<String>,
}

impl Validate for AboutRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("Headline", &self.headline)?;
        require_non_blank("Summary", &self.summary)?;
        require_non_blank("Location", &self.location)
    }
}

impl From<AboutRequest> for About {
    fn from(req: AboutRequest) -> Self {
        Self {
            id: ABOUT_ID.to_string(),
            headline: req.headline,
            summary: req.summary,
            location: req.location,
            avatar_url: req.avatar_url,
        }
    }
}
