//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use sharehub_auth::{AccessGate, TokenCodec};
use sharehub_core::config::AppConfig;
use sharehub_core::result::AppResult;
use sharehub_store::traits::{ProjectLookup, ProjectStore};

/// Application state passed to every handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Validated application configuration.
    pub config: Arc<AppConfig>,
    /// Project store used by the management endpoints.
    pub projects: Arc<dyn ProjectStore>,
    /// Bearer token codec.
    pub tokens: Arc<TokenCodec>,
    /// Access gate behind the three access middlewares.
    pub access: Arc<AccessGate>,
    /// Process start, for the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    /// Wires the state around `store`.
    ///
    /// `config` must already have passed [`AppConfig::validate`]; a missing
    /// signing secret fails here.
    pub fn new<S: ProjectStore>(config: AppConfig, store: Arc<S>) -> AppResult<Self> {
        let tokens = Arc::new(TokenCodec::new(&config.auth)?);
        let lookup: Arc<dyn ProjectLookup> = store.clone();
        let access = Arc::new(AccessGate::new(lookup, tokens.clone()));

        Ok(Self {
            config: Arc::new(config),
            projects: store,
            tokens,
            access,
            started_at: Instant::now(),
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
