// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str = "id, username, email, full_name, password_hash, avatar, cover_image, refresh_token, created_at";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn build_update_query(
        id: UserId,
        full_name: Option<String>,
        username: Option<Username>,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        let mut first = true;

        if let Some(full_name) = full_name {
            first = false;
            builder.push("full_name = ");
            builder.push_bind(full_name);
        }

        if let Some(username) = username {
            if !first {
                builder.push(", ");
            }
            builder.push("username = ");
            let value: String = username.into();
            builder.push_bind(value);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {USER_COLUMNS}"));

        builder
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    full_name: String,
    password_hash: String,
    avatar: String,
    cover_image: Option<String>,
    refresh_token: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: Email::new(row.email)?,
            full_name: row.full_name,
            password_hash: PasswordHash::new(row.password_hash)?,
            avatar: row.avatar,
            cover_image: row.cover_image,
            refresh_token: row.refresh_token,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            email,
            full_name,
            password_hash,
            avatar,
            cover_image,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, email, full_name, password_hash, avatar, cover_image, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, username, email, full_name, password_hash, avatar, cover_image, refresh_token, created_at",
        )
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(full_name)
        .bind(password_hash.as_str())
        .bind(avatar)
        .bind(cover_image)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, full_name, password_hash, avatar, cover_image, refresh_token, created_at
             FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, full_name, password_hash, avatar, cover_image, refresh_token, created_at
             FROM users WHERE username = $1",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> DomainResult<Option<User>> {
        if username.is_none() && email.is_none() {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, full_name, password_hash, avatar, cover_image, refresh_token, created_at
             FROM users WHERE username = $1 OR email = $2",
        )
        .bind(username.map(Username::as_str))
        .bind(email.map(Email::as_str))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return Err(DomainError::Validation(
                "no fields provided for update".into(),
            ));
        }

        let UserUpdate {
            id,
            full_name,
            username,
        } = update;

        let mut builder = Self::build_update_query(id, full_name, username);

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn set_refresh_token(&self, id: UserId, token: Option<&str>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET refresh_token = $1 WHERE id = $2")
            .bind(token)
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn set_password_hash(&self, id: UserId, hash: &PasswordHash) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(hash.as_str())
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn set_avatar(&self, id: UserId, url: &str) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET avatar = $1 WHERE id = $2
             RETURNING id, username, email, full_name, password_hash, avatar, cover_image, refresh_token, created_at",
        )
        .bind(url)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn set_cover_image(&self, id: UserId, url: &str) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET cover_image = $1 WHERE id = $2
             RETURNING id, username, email, full_name, password_hash, avatar, cover_image, refresh_token, created_at",
        )
        .bind(url)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}
