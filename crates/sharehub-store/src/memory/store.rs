//! In-memory project store using dashmap.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, info};
use uuid::Uuid;

use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;
use sharehub_entity::project::{CreateProject, Project, UpdateProject};

use crate::link::generate_share_link;
use crate::traits::{ProjectLookup, ProjectStore};

/// Attempts at drawing an unused share link before giving up.
const MAX_LINK_ATTEMPTS: usize = 8;

/// In-memory project store.
///
/// Projects are keyed by id; a second index maps share links to ids. The
/// two maps are never locked at the same time: a link is reserved in the
/// index first and the project row is written afterwards, so a lookup by
/// link always re-checks the project's current `share_link`.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    /// id → project.
    projects: DashMap<String, Project>,
    /// share link → id.
    links: DashMap<String, String>,
}

impl MemoryProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Reserve `link` for project `id`. Returns `false` if already taken.
    fn reserve_link(&self, link: &str, id: &str) -> bool {
        match self.links.entry(link.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(id.to_string());
                true
            }
        }
    }

    /// Reserve a freshly generated link for project `id`.
    fn reserve_new_link(&self, id: &str) -> AppResult<String> {
        for _ in 0..MAX_LINK_ATTEMPTS {
            let link = generate_share_link();
            if self.reserve_link(&link, id) {
                return Ok(link);
            }
            debug!(project_id = %id, "Share link collision, drawing again");
        }
        Err(AppError::internal("Could not allocate a unique share link"))
    }

    fn release_link(&self, link: &str, id: &str) {
        self.links.remove_if(link, |_, owner| owner == id);
    }
}

#[async_trait]
impl ProjectLookup for MemoryProjectStore {
    /// Accepts only the lowercase hyphenated form that ids are stored under.
    fn is_valid_id(&self, id: &str) -> bool {
        Uuid::try_parse(id).is_ok_and(|uuid| uuid.hyphenated().to_string() == id)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Project>> {
        Ok(self.projects.get(id).map(|p| p.value().clone()))
    }

    async fn find_by_share_link(&self, share_link: &str) -> AppResult<Option<Project>> {
        let Some(id) = self.links.get(share_link).map(|e| e.value().clone()) else {
            return Ok(None);
        };
        Ok(self
            .projects
            .get(&id)
            .filter(|p| p.has_share_link(share_link))
            .map(|p| p.value().clone()))
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn create(&self, project: CreateProject) -> AppResult<Project> {
        let id = Uuid::new_v4().to_string();
        let share_link = self.reserve_new_link(&id)?;
        let now = Utc::now();

        let project = Project {
            id: id.clone(),
            owner_id: project.owner_id,
            share_link,
            title: project.title,
            description: project.description,
            uploader_name: project.uploader_name,
            created_at: now,
            updated_at: now,
        };
        self.projects.insert(id, project.clone());

        info!(project_id = %project.id, owner_id = %project.owner_id, "Project created");
        Ok(project)
    }

    async fn insert(&self, project: Project) -> AppResult<Project> {
        if !self.reserve_link(&project.share_link, &project.id) {
            return Err(AppError::conflict("Share link is already in use"));
        }

        let inserted = match self.projects.entry(project.id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(project.clone());
                true
            }
        };

        if !inserted {
            self.release_link(&project.share_link, &project.id);
            return Err(AppError::conflict(format!(
                "Project {} already exists",
                project.id
            )));
        }

        debug!(project_id = %project.id, "Project inserted");
        Ok(project)
    }

    async fn update(&self, id: &str, update: UpdateProject) -> AppResult<Project> {
        let mut project = self
            .projects
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))?;

        if let Some(title) = update.title {
            project.title = title;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn rotate_share_link(&self, id: &str) -> AppResult<Project> {
        if !self.projects.contains_key(id) {
            return Err(AppError::not_found(format!("Project {id} not found")));
        }

        let new_link = self.reserve_new_link(id)?;

        let (old_link, project) = {
            let Some(mut project) = self.projects.get_mut(id) else {
                self.release_link(&new_link, id);
                return Err(AppError::not_found(format!("Project {id} not found")));
            };
            let old_link = std::mem::replace(&mut project.share_link, new_link);
            project.updated_at = Utc::now();
            (old_link, project.clone())
        };
        self.release_link(&old_link, id);

        info!(project_id = %id, "Share link rotated");
        Ok(project)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let Some((_, project)) = self.projects.remove(id) else {
            return Ok(false);
        };
        self.release_link(&project.share_link, id);

        info!(project_id = %id, "Project deleted");
        Ok(true)
    }
}
