//! Token issuance.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use sharehub_core::error::{AppError, FieldError};

use super::claims::{AccessClaims, AccessGrant, TokenKind};

/// Creates signed HS256 bearer tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder").finish_non_exhaustive()
    }
}

/// A freshly issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Compact `header.payload.signature` string.
    pub token: String,
    /// Kind of grant the token carries.
    pub kind: TokenKind,
    /// Issuance time.
    pub issued_at: DateTime<Utc>,
    /// Expiration time.
    pub expires_at: DateTime<Utc>,
}

impl TokenEncoder {
    /// Creates a new encoder from the shared secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    /// Signs `grant`, valid from now for `validity`.
    ///
    /// Fails with a validation error when the project id or the identity
    /// field is empty, or when `validity` puts the expiry out of range.
    pub fn issue(&self, grant: AccessGrant, validity: Duration) -> Result<IssuedToken, AppError> {
        let mut missing = Vec::new();
        if grant.project_id().is_empty() {
            missing.push(FieldError::new(
                "project_id",
                "required",
                "project_id is required",
            ));
        }
        if grant.identity().is_empty() {
            let field = match grant.kind() {
                TokenKind::OwnerAccess => "owner_id",
                TokenKind::ShareLinkAccess => "share_link",
            };
            missing.push(FieldError::new(
                field,
                "required",
                format!("{field} is required"),
            ));
        }
        if !missing.is_empty() {
            return Err(AppError::validation(missing));
        }

        let now = Utc::now();
        let exp = now.checked_add_signed(validity).ok_or_else(|| {
            AppError::validation(vec![FieldError::new(
                "validity",
                "out_of_range",
                "Token validity window is out of range",
            )])
        })?;
        let kind = grant.kind();
        let claims = AccessClaims {
            grant,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        debug!(
            kind = %kind,
            project_id = %claims.grant.project_id(),
            jti = %claims.jti,
            "Access token issued"
        );

        Ok(IssuedToken {
            token,
            kind,
            issued_at: now,
            expires_at: exp,
        })
    }
}
