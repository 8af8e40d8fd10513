use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    value_objects::{Email, PasswordHash, UserId, Username},
};
use async_trait::async_trait;

/// Credential store for accounts. Uniqueness of username and email is
/// enforced at write time; violations surface as `DomainError::Conflict`.
///
/// The `set_*` methods are narrow single-field writes: they must not touch
/// or re-validate any other column. Login, logout, rotation and password
/// change go through them so a token write can never trip over unrelated
/// field validation.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    /// Match on either identity, the way login accepts one or the other.
    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> DomainResult<Option<User>>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    /// `None` clears the stored token (logout).
    async fn set_refresh_token(&self, id: UserId, token: Option<&str>) -> DomainResult<()>;

    async fn set_password_hash(&self, id: UserId, hash: &PasswordHash) -> DomainResult<()>;

    async fn set_avatar(&self, id: UserId, url: &str) -> DomainResult<User>;

    async fn set_cover_image(&self, id: UserId, url: &str) -> DomainResult<User>;
}
