//! Token signing configuration.

use serde::{Deserialize, Serialize};

/// Minimum accepted length of a configured signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Longest accepted token validity window, in days.
pub const MAX_TOKEN_TTL_DAYS: u64 = 3650;

/// Bearer token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Required in production.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Validity window of owner tokens in days.
    #[serde(default = "default_owner_ttl")]
    pub owner_token_ttl_days: u64,
    /// Validity window of share-link tokens in days.
    #[serde(default = "default_share_link_ttl")]
    pub share_link_token_ttl_days: u64,
    /// Clock-skew allowance applied to expiry checks, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            owner_token_ttl_days: default_owner_ttl(),
            share_link_token_ttl_days: default_share_link_ttl(),
            leeway_seconds: 0,
        }
    }
}

fn default_owner_ttl() -> u64 {
    7
}

fn default_share_link_ttl() -> u64 {
    30
}
