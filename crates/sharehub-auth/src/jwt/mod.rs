//! Bearer token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

use chrono::Duration;

use sharehub_core::config::AuthConfig;
use sharehub_core::config::auth::MAX_TOKEN_TTL_DAYS;
use sharehub_core::error::AppError;

pub use claims::{AccessClaims, AccessGrant, TokenKind};
pub use decoder::{TokenDecoder, TokenStatus};
pub use encoder::{IssuedToken, TokenEncoder};

/// Issues and verifies bearer tokens with one shared secret.
///
/// Stateless: no token is ever stored, so verification costs no lookup.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    encoder: TokenEncoder,
    decoder: TokenDecoder,
    owner_ttl: Duration,
    share_link_ttl: Duration,
}

impl TokenCodec {
    /// Creates a codec from auth configuration.
    ///
    /// Fails when no signing secret is configured or a validity window is
    /// outside `1..=MAX_TOKEN_TTL_DAYS` days.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let secret = config
            .jwt_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::configuration("auth.jwt_secret is not set"))?;

        Ok(Self {
            encoder: TokenEncoder::new(secret.as_bytes()),
            decoder: TokenDecoder::new(secret.as_bytes(), config.leeway_seconds),
            owner_ttl: validity_days("auth.owner_token_ttl_days", config.owner_token_ttl_days)?,
            share_link_ttl: validity_days(
                "auth.share_link_token_ttl_days",
                config.share_link_token_ttl_days,
            )?,
        })
    }

    /// Signs an arbitrary grant with an explicit validity window.
    pub fn issue(&self, grant: AccessGrant, validity: Duration) -> Result<IssuedToken, AppError> {
        self.encoder.issue(grant, validity)
    }

    /// Issues an owner token with the configured owner validity window.
    pub fn issue_owner_token(
        &self,
        project_id: &str,
        owner_id: &str,
    ) -> Result<IssuedToken, AppError> {
        self.issue(AccessGrant::owner(project_id, owner_id), self.owner_ttl)
    }

    /// Issues a share-link token with the configured share-link validity window.
    pub fn issue_share_link_token(
        &self,
        project_id: &str,
        share_link: &str,
    ) -> Result<IssuedToken, AppError> {
        self.issue(
            AccessGrant::share_link(project_id, share_link),
            self.share_link_ttl,
        )
    }

    /// Verifies signature and expiry.
    pub fn parse(&self, token: &str) -> TokenStatus {
        self.decoder.parse(token)
    }

    /// Verifies signature and expiry, reporting failures as errors.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AppError> {
        self.decoder.verify(token)
    }
}

fn validity_days(name: &str, days: u64) -> Result<Duration, AppError> {
    if !(1..=MAX_TOKEN_TTL_DAYS).contains(&days) {
        return Err(AppError::configuration(format!(
            "{name} must be between 1 and {MAX_TOKEN_TTL_DAYS} days"
        )));
    }
    i64::try_from(days)
        .ok()
        .and_then(Duration::try_days)
        .ok_or_else(|| AppError::configuration(format!("{name} is out of range")))
}
