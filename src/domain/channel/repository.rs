use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

use super::video::WatchHistoryEntry;

/// Read-only view over the subscription relation, queried per channel when
/// building a profile.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// How many accounts subscribe to `channel_id`.
    async fn count_subscribers(&self, channel_id: UserId) -> DomainResult<u64>;

    /// How many channels `user_id` subscribes to.
    async fn count_subscribed_to(&self, user_id: UserId) -> DomainResult<u64>;

    async fn is_subscribed(&self, subscriber_id: UserId, channel_id: UserId)
    -> DomainResult<bool>;
}

/// Read-only view over the video relation.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// The caller's watch history in viewing order, duplicates included,
    /// each entry joined with its video's owner.
    async fn watch_history_for(&self, user_id: UserId) -> DomainResult<Vec<WatchHistoryEntry>>;
}
