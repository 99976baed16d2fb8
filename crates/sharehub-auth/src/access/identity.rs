//! Identifiers carried by one request.

/// Raw identifiers pulled from a request, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestIdentifiers {
    /// Project id path segment.
    pub project_id: Option<String>,
    /// Share link path segment.
    pub share_link: Option<String>,
    /// Owner identity header.
    pub owner_id: Option<String>,
    /// Bearer token, from whichever source carried it.
    pub bearer_token: Option<String>,
}

impl RequestIdentifiers {
    /// Identifiers addressing a project by id.
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    /// Identifiers addressing a project by share link.
    pub fn for_share_link(share_link: impl Into<String>) -> Self {
        Self {
            share_link: Some(share_link.into()),
            ..Self::default()
        }
    }

    /// Adds an owner identity.
    pub fn with_owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Adds a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}
