// src/infrastructure/repositories/postgres_subscription.rs
use super::map_sqlx;
use crate::domain::channel::SubscriptionRepository;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn count_subscribers(&self, channel_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM subscriptions WHERE channel_id = $1",
        )
        .bind(i64::from(channel_id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }

    async fn count_subscribed_to(&self, user_id: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM subscriptions WHERE subscriber_id = $1",
        )
        .bind(i64::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map(|count| count as u64)
        .map_err(map_sqlx)
    }

    async fn is_subscribed(
        &self,
        subscriber_id: UserId,
        channel_id: UserId,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2
            )",
        )
        .bind(i64::from(subscriber_id))
        .bind(i64::from(channel_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
