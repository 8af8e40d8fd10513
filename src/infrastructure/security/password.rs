// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use async_trait::async_trait;

// OWASP-recommended Argon2id parameters, pinned so stored hashes stay
// verifiable even if the crate's defaults move.
const MEMORY_KIB: u32 = 19 * 1024;
const ITERATIONS: u32 = 2;
const PARALLELISM: u32 = 1;

/// Argon2id hasher for account passwords. Hashing and verification run on
/// the blocking pool so a registration burst cannot stall the runtime.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        let params =
            Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, None).unwrap_or_default();
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    /// A mismatch maps to `Unauthorized`; a stored hash that does not parse
    /// as a PHC string is a data problem, not a caller problem, and maps to
    /// `Infrastructure`.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&expected_hash).map_err(|err| {
                ApplicationError::infrastructure(format!("stored password hash is unreadable: {err}"))
            })?;
            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(()),
                Err(HashError::Password) => {
                    Err(ApplicationError::unauthorized("invalid credentials"))
                }
                Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
            }
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_roundtrip() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("chai-and-code").await.unwrap();
        assert!(hash.starts_with("$argon2id$"));
        hasher.verify("chai-and-code", &hash).await.unwrap();
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("chai-and-code").await.unwrap();
        let err = hasher.verify("wrong-password", &hash).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn unreadable_stored_hash_is_infrastructure() {
        let hasher = Argon2PasswordHasher::new();
        let err = hasher
            .verify("chai-and-code", "not-a-phc-string")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Infrastructure(_)));
    }
}
