// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

/// A registered account. `password_hash` and `refresh_token` never leave the
/// application layer; read models project the sanitized fields only.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub full_name: String,
    pub password_hash: PasswordHash,
    pub avatar: String,
    pub cover_image: Option<String>,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub full_name: String,
    pub password_hash: PasswordHash,
    pub avatar: String,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Email,
        full_name: String,
        password_hash: PasswordHash,
        avatar: String,
        cover_image: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            full_name,
            password_hash,
            avatar,
            cover_image,
            created_at,
        }
    }
}

/// Partial profile update. Only the supplied fields are written.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub full_name: Option<String>,
    pub username: Option<Username>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            full_name: None,
            username: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.username.is_none()
    }
}
