use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, ChannelProfileDto},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::Username;

impl UserQueryService {
    /// Channel profile for `username`, enriched with both subscription
    /// counts and whether the caller subscribes to it. Lookup is
    /// case-insensitive because usernames are stored lowercased.
    pub async fn get_channel_profile(
        &self,
        actor: &AuthenticatedUser,
        username: &str,
    ) -> ApplicationResult<ChannelProfileDto> {
        if username.trim().is_empty() {
            return Err(ApplicationError::validation("username is missing"));
        }
        // Lookup form, not the registration rules: a handle too short to
        // ever register should read as a miss, not a bad request.
        let username = Username::lookup(username)?;

        let channel = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("channel does not exist"))?;

        let subscribers_count = self.subscription_repo.count_subscribers(channel.id).await?;
        let subscribed_to_count = self
            .subscription_repo
            .count_subscribed_to(channel.id)
            .await?;
        let is_subscribed = self
            .subscription_repo
            .is_subscribed(actor.id, channel.id)
            .await?;

        Ok(ChannelProfileDto {
            full_name: channel.full_name,
            username: channel.username.to_string(),
            email: channel.email.to_string(),
            avatar: channel.avatar,
            cover_image: channel.cover_image,
            subscribers_count,
            subscribed_to_count,
            is_subscribed,
        })
    }
}
