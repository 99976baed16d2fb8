//! Token verification.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use sharehub_core::error::AppError;

use super::claims::AccessClaims;

/// Outcome of parsing a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    /// Signature and expiry both check out.
    Valid(AccessClaims),
    /// Validly signed but past its expiry.
    Expired,
    /// Bad signature, wrong algorithm, missing fields, or unknown kind.
    Malformed,
}

/// Verifies HS256 bearer tokens.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from the shared secret.
    ///
    /// `leeway_seconds` is the clock-skew allowance on `exp`; with zero a
    /// token is still valid at `exp` and expired strictly after it.
    pub fn new(secret: &[u8], leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = leeway_seconds;
        validation.set_required_spec_claims(&["exp", "iat"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verifies the signature and expiry of `token` and decodes its claims.
    pub fn parse(&self, token: &str) -> TokenStatus {
        let claims = match decode::<AccessClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                return match e.kind() {
                    JwtErrorKind::ExpiredSignature => TokenStatus::Expired,
                    _ => {
                        debug!(error = %e, "Rejected malformed access token");
                        TokenStatus::Malformed
                    }
                };
            }
        };

        if claims.grant.project_id().is_empty() || claims.grant.identity().is_empty() {
            debug!(jti = %claims.jti, "Rejected access token with empty claims");
            return TokenStatus::Malformed;
        }

        TokenStatus::Valid(claims)
    }

    /// [`parse`](Self::parse) mapped onto the error taxonomy.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AppError> {
        match self.parse(token) {
            TokenStatus::Valid(claims) => Ok(claims),
            TokenStatus::Expired => Err(AppError::expired_credential("Access token has expired")),
            TokenStatus::Malformed => Err(AppError::malformed_credential("Invalid access token")),
        }
    }
}
