//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files plus `SHAREHUB__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod logging;

use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;

use self::auth::{MAX_TOKEN_TTL_DAYS, MIN_SECRET_LEN};
use crate::error::AppError;

/// Deployment mode. Production refuses permissive fallbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Local development: ephemeral secrets and any-origin CORS are allowed.
    #[default]
    Development,
    /// Production: every secret and origin must be configured explicitly.
    Production,
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment mode.
    #[serde(default)]
    pub environment: Environment,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Token signing settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default`, an environment-specific overlay and
    /// environment variables prefixed with `SHAREHUB__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHAREHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Validates the configuration once at startup.
    ///
    /// In production a signing secret of at least 32 bytes and an explicit
    /// CORS origin list are mandatory. In development a missing secret is
    /// replaced by a random one that lives for this process only.
    pub fn validate(&mut self) -> Result<(), AppError> {
        match (self.environment, self.auth.jwt_secret.as_deref()) {
            (Environment::Production, None) => {
                return Err(AppError::configuration(
                    "auth.jwt_secret must be set in production",
                ));
            }
            (Environment::Production, Some(secret)) if secret.len() < MIN_SECRET_LEN => {
                return Err(AppError::configuration(format!(
                    "auth.jwt_secret must be at least {MIN_SECRET_LEN} bytes"
                )));
            }
            (Environment::Development, None) => {
                tracing::warn!(
                    "auth.jwt_secret not set; using an ephemeral secret, tokens will not survive a restart"
                );
                self.auth.jwt_secret = Some(Alphanumeric.sample_string(&mut rand::rng(), 48));
            }
            _ => {}
        }

        if self.environment == Environment::Production
            && (self.server.cors.allowed_origins.is_empty()
                || self.server.cors.allowed_origins.iter().any(|o| o == "*"))
        {
            return Err(AppError::configuration(
                "server.cors.allowed_origins must list explicit origins in production",
            ));
        }

        for (name, days) in [
            ("auth.owner_token_ttl_days", self.auth.owner_token_ttl_days),
            ("auth.share_link_token_ttl_days", self.auth.share_link_token_ttl_days),
        ] {
            if !(1..=MAX_TOKEN_TTL_DAYS).contains(&days) {
                return Err(AppError::configuration(format!(
                    "{name} must be between 1 and {MAX_TOKEN_TTL_DAYS} days"
                )));
            }
        }

        Ok(())
    }
}
