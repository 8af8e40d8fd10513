// src/infrastructure/security/token.rs
use crate::application::{
    dto::TokenClaims,
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenService,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// HS256-signed claims. `jti` keeps two tokens minted for the same subject
/// within the same second distinct, which rotation relies on.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    jti: String,
    iat: i64,
    exp: i64,
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SigningKeys {
    fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

/// Issues and verifies the two token kinds with distinct secrets and
/// lifetimes. Stateless: everything needed to verify is in the token and
/// the configured secrets.
pub struct JwtTokenService {
    access: SigningKeys,
    refresh: SigningKeys,
}

impl JwtTokenService {
    pub fn new(
        access_secret: &str,
        access_ttl: Duration,
        refresh_secret: &str,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access: SigningKeys::new(access_secret, access_ttl),
            refresh: SigningKeys::new(refresh_secret, refresh_ttl),
        }
    }

    fn issue(keys: &SigningKeys, user_id: UserId) -> ApplicationResult<String> {
        let now = Utc::now();
        let expires_at = now
            + chrono::Duration::from_std(keys.ttl)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let claims = Claims {
            sub: user_id.into(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn verify(keys: &SigningKeys, token: &str) -> ApplicationResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &keys.decoding, &validation)
            .map_err(|_| ApplicationError::unauthorized("invalid or expired token"))?;

        let user_id = UserId::new(data.claims.sub)
            .map_err(|_| ApplicationError::unauthorized("invalid or expired token"))?;

        Ok(TokenClaims {
            user_id,
            issued_at: timestamp_to_datetime(data.claims.iat)?,
            expires_at: timestamp_to_datetime(data.claims.exp)?,
        })
    }
}

fn timestamp_to_datetime(secs: i64) -> ApplicationResult<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| ApplicationError::unauthorized("invalid or expired token"))
}

#[async_trait]
impl TokenService for JwtTokenService {
    async fn issue_access_token(&self, user_id: UserId) -> ApplicationResult<String> {
        Self::issue(&self.access, user_id)
    }

    async fn issue_refresh_token(&self, user_id: UserId) -> ApplicationResult<String> {
        Self::issue(&self.refresh, user_id)
    }

    async fn verify_access_token(&self, token: &str) -> ApplicationResult<TokenClaims> {
        Self::verify(&self.access, token)
    }

    async fn verify_refresh_token(&self, token: &str) -> ApplicationResult<TokenClaims> {
        Self::verify(&self.refresh, token)
    }
}
