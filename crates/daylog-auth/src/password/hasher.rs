//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use daylog_core::config::AuthConfig;
use daylog_core::error::{AppError, ErrorKind};

/// Hashes and verifies credentials with Argon2id.
///
/// Cost parameters come from configuration; verification reads them back
/// from the stored PHC string, so hashes made under older settings still
/// verify.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a hasher with the configured cost parameters.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid Argon2 parameters: {e}"),
                e,
            )
        })?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; malformed hashes are errors.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(&AuthConfig {
            hash_memory_kib: 1024,
            hash_iterations: 1,
            ..AuthConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hasher = hasher();
        let hash = hasher.hash_password("secret").unwrap();

        assert_ne!(hash, "secret");
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("secret", &hash).unwrap());
        assert!(!hasher.verify_password("Secret", &hash).unwrap());
    }

    #[test]
    fn test_salted() {
        let hasher = hasher();
        let a = hasher.hash_password("secret").unwrap();
        let b = hasher.hash_password("secret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert!(hasher().verify_password("secret", "plain").is_err());
    }

    #[test]
    fn test_rejects_bad_params() {
        let err = PasswordHasher::new(&AuthConfig {
            hash_iterations: 0,
            ..AuthConfig::default()
        })
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
