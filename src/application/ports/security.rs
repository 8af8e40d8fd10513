// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::TokenClaims};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Stateless issuer/verifier for the two token kinds. Access and refresh
/// tokens are signed with distinct secrets and carry independent lifetimes,
/// so one kind can never be presented as the other.
#[async_trait]
pub trait TokenService: Send + Sync {
    async fn issue_access_token(&self, user_id: UserId) -> ApplicationResult<String>;

    async fn issue_refresh_token(&self, user_id: UserId) -> ApplicationResult<String>;

    /// Fails with `Unauthorized` on bad signature or expiry.
    async fn verify_access_token(&self, token: &str) -> ApplicationResult<TokenClaims>;

    /// Fails with `Unauthorized` on bad signature or expiry.
    async fn verify_refresh_token(&self, token: &str) -> ApplicationResult<TokenClaims>;
}
