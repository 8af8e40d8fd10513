use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verified contents of a signed token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A freshly minted access/refresh pair. The refresh token matches the
/// value persisted on the account at issuance time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairDto {
    pub access_token: String,
    pub refresh_token: String,
}

/// The caller identity the auth middleware hands to every operation.
/// Threaded explicitly; there is no ambient request context.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            id: claims.user_id,
            issued_at: claims.issued_at,
            expires_at: claims.expires_at,
        }
    }
}
