use serde::{Deserialize, Serialize};

use super::shared::{Validate, require_non_blank};
use crate::error::AppError;
use crate::store::{EntityId, Record};

/// A link to one of the owner's profiles elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SocialLink {
    /// Server-assigned identifier.
    #[schema(value_type = String, example = "4")]
    pub id: EntityId,
    #[schema(example = "GitHub")]
    pub label: String,
    #[schema(example = "https://github.com/example")]
    pub url: String,
    /// Free-form icon tag interpreted by the frontend.
    #[schema(example = "github")]
    pub icon: Option<String>,
}

impl Record for SocialLink {
    const KIND: &'static str = "Link";

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

/// Request body for creating or replacing a social link.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SocialLinkRequest {
    pub label: String,
    pub url: String,
    pub icon: Option<String>,
}

impl Validate for SocialLinkRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_non_blank("Label", &self.label)?;
        require_non_blank("URL", &self.url)
    }
}

impl From<SocialLinkRequest> for SocialLink {
    fn from(req: SocialLinkRequest) -> Self {
        Self {
            id: EntityId::default(),
            label: req.label,
            url: req.url,
            icon: req.icon,
        }
    }
}
