use std::sync::Arc;

use common::storage::SlotStore;
use tokio::sync::RwLock;
use tracing::info;

use super::error::StoreError;
use super::repository::{InMemoryRepository, Record, Repository};
use super::sequence::{EntityId, IdSequence};
use crate::models::about::{ABOUT_ID, About};
use crate::models::link::SocialLink;
use crate::models::project::Project;
use crate::utils::filename::{avatar_content_type, avatar_extension};

/// Public path the avatar is served from.
pub const AVATAR_URL: &str = "/api/about/photo";

/// File name prefix of the avatar slot.
pub const AVATAR_PREFIX: &str = "avatar";

/// Avatar bytes read back from storage.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

/// All portfolio content: the about singleton, projects, social links and the avatar.
pub struct Portfolio {
    about: RwLock<About>,
    projects: Box<dyn Repository<Project>>,
    links: Box<dyn Repository<SocialLink>>,
    avatars: Arc<dyn SlotStore>,
}

impl Portfolio {
    pub fn new(
        about: About,
        projects: Box<dyn Repository<Project>>,
        links: Box<dyn Repository<SocialLink>>,
        avatars: Arc<dyn SlotStore>,
    ) -> Self {
        Self {
            about: RwLock::new(about),
            projects,
            links,
            avatars,
        }
    }

    /// Empty in-memory portfolio whose collections share one id sequence.
    pub fn in_memory(avatars: Arc<dyn SlotStore>) -> Self {
        let ids = Arc::new(IdSequence::new());
        Self::new(
            About::default(),
            Box::new(InMemoryRepository::new(ids.clone())),
            Box::new(InMemoryRepository::new(ids)),
            avatars,
        )
    }

    pub async fn about(&self) -> About {
        self.about.read().await.clone()
    }

    /// Replace the about profile wholesale. The id is always reset to `about`.
    pub async fn update_about(&self, mut about: About) -> About {
        about.id = ABOUT_ID.to_string();
        *self.about.write().await = about.clone();
        about
    }

    pub async fn list_projects(&self) -> Vec<Project> {
        self.projects.list().await
    }

    pub async fn create_project(&self, project: Project) -> Project {
        self.projects.create(project).await
    }

    pub async fn update_project(&self, id: &str, project: Project) -> Result<Project, StoreError> {
        update_by_raw_id(&*self.projects, id, project).await
    }

    pub async fn delete_project(&self, id: &str) {
        delete_by_raw_id(&*self.projects, id).await
    }

    pub async fn list_links(&self) -> Vec<SocialLink> {
        self.links.list().await
    }

    pub async fn create_link(&self, link: SocialLink) -> SocialLink {
        self.links.create(link).await
    }

    pub async fn update_link(&self, id: &str, link: SocialLink) -> Result<SocialLink, StoreError> {
        update_by_raw_id(&*self.links, id, link).await
    }

    pub async fn delete_link(&self, id: &str) {
        delete_by_raw_id(&*self.links, id).await
    }

    /// Store a new avatar and point the about profile at it.
    ///
    /// Empty uploads leave everything untouched. The extension is taken from
    /// `original_filename`, falling back to `.jpg`.
    pub async fn save_avatar(
        &self,
        data: &[u8],
        original_filename: Option<&str>,
    ) -> Result<About, StoreError> {
        if data.is_empty() {
            return Ok(self.about().await);
        }

        let extension = avatar_extension(original_filename);
        let path = self.avatars.replace(data, &extension).await?;
        info!(path = %path.display(), size = data.len(), "Avatar replaced");

        let mut about = self.about.write().await;
        about.avatar_url = Some(AVATAR_URL.to_string());
        Ok(about.clone())
    }

    pub async fn avatar(&self) -> Result<Avatar, StoreError> {
        let file = self.avatars.load().await?;
        Ok(Avatar {
            content_type: avatar_content_type(&file.file_name),
            data: file.data,
        })
    }
}

async fn update_by_raw_id<T: Record>(
    repo: &dyn Repository<T>,
    raw_id: &str,
    value: T,
) -> Result<T, StoreError> {
    let id = EntityId::parse(raw_id).ok_or_else(|| StoreError::NotFound {
        kind: T::KIND,
        id: raw_id.to_string(),
    })?;
    repo.update(id, value).await
}

async fn delete_by_raw_id<T: Record>(repo: &dyn Repository<T>, raw_id: &str) {
    let removed = match EntityId::parse(raw_id) {
        Some(id) => repo.delete(id).await,
        None => false,
    };
    if !removed {
        tracing::debug!(kind = T::KIND, id = raw_id, "Delete of absent record ignored");
    }
}
