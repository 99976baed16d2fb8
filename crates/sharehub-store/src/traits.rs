//! Store contracts.

use async_trait::async_trait;

use sharehub_core::result::AppResult;
use sharehub_entity::project::{CreateProject, Project, UpdateProject};

/// Read-only lookups the authorization core needs.
///
/// The identifier format is owned by the implementation; callers ask
/// [`ProjectLookup::is_valid_id`] instead of assuming a scheme.
#[async_trait]
pub trait ProjectLookup: Send + Sync + 'static {
    /// Whether `id` is shaped like an identifier this store could have issued.
    fn is_valid_id(&self, id: &str) -> bool;

    /// Find a project by its identifier.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Project>>;

    /// Find a project by its current share link.
    async fn find_by_share_link(&self, share_link: &str) -> AppResult<Option<Project>>;
}

/// Full project store used by the management endpoints.
#[async_trait]
pub trait ProjectStore: ProjectLookup {
    /// Create a project with a freshly generated, unique share link.
    async fn create(&self, project: CreateProject) -> AppResult<Project>;

    /// Insert a fully formed project.
    ///
    /// Fails with a conflict when the id or the share link is already taken.
    async fn insert(&self, project: Project) -> AppResult<Project>;

    /// Apply a partial update to the descriptive fields.
    async fn update(&self, id: &str, update: UpdateProject) -> AppResult<Project>;

    /// Replace the share link with a new unique one.
    async fn rotate_share_link(&self, id: &str) -> AppResult<Project>;

    /// Delete a project. Returns `true` if it existed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
