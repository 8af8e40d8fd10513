use std::sync::Arc;

use crate::domain::{
    channel::{SubscriptionRepository, VideoRepository},
    user::UserRepository,
};

/// Builds the denormalized read models: channel profile with subscriber
/// counts and owner-enriched watch history.
pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) video_repo: Arc<dyn VideoRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        video_repo: Arc<dyn VideoRepository>,
    ) -> Self {
        Self {
            user_repo,
            subscription_repo,
            video_repo,
        }
    }
}
