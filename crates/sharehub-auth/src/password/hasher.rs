//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use sharehub_core::error::AppError;
use sharehub_core::result::AppResult;

/// Hashes and verifies passwords with Argon2id, producing PHC strings.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher with the library's recommended cost parameters.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Creates a hasher with explicit cost parameters.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> AppResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes `password` with a fresh random salt.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        if password.is_empty() {
            return Err(AppError::invalid_field(
                "password",
                "length",
                "password must not be empty",
            ));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Checks `password` against a stored PHC string.
    ///
    /// A mismatch is `Ok(false)`; an unreadable hash is an error.
    pub fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
