//! # sharehub-auth
//!
//! The authorization core of ShareHub.
//!
//! ## Modules
//!
//! - `jwt`: signed, time-limited bearer tokens carrying an owner or
//!   share-link grant
//! - `access`: the access evaluator and the gate behind the three request
//!   checks (owner-only, public-load, owner-or-link)
//! - `validate`: identifier shape checks and free-text escaping
//! - `password`: Argon2id password hashing (not used by the access flow)

pub mod access;
pub mod jwt;
pub mod password;
pub mod validate;

pub use access::{AccessDecision, AccessGate, AccessPolicy, ProjectAccess, RequestIdentifiers};
pub use jwt::{AccessClaims, AccessGrant, TokenCodec, TokenKind, TokenStatus};
pub use password::PasswordHasher;
