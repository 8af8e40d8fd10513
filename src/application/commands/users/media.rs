use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
        ports::media::{MediaAsset, public_id_from_url},
    },
    domain::user::User,
};

pub struct UpdateMediaCommand {
    pub asset: Option<MediaAsset>,
}

impl UserCommandService {
    pub async fn update_avatar(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateMediaCommand,
    ) -> ApplicationResult<UserDto> {
        let asset = Self::require_asset(command, "avatar")?;
        let user = self.require_user(actor).await?;

        let previous = Some(user.avatar.clone());
        let updated = self.user_repo.set_avatar(user.id, &asset.url).await?;

        self.delete_replaced_asset(previous).await;
        Ok(updated.into())
    }

    pub async fn update_cover_image(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateMediaCommand,
    ) -> ApplicationResult<UserDto> {
        let asset = Self::require_asset(command, "cover image")?;
        let user = self.require_user(actor).await?;

        let previous = user.cover_image.clone();
        let updated = self.user_repo.set_cover_image(user.id, &asset.url).await?;

        self.delete_replaced_asset(previous).await;
        Ok(updated.into())
    }

    fn require_asset(command: UpdateMediaCommand, kind: &str) -> ApplicationResult<MediaAsset> {
        command.asset.ok_or_else(|| {
            ApplicationError::validation(format!("{kind} file is missing or failed to upload"))
        })
    }

    async fn require_user(&self, actor: &AuthenticatedUser) -> ApplicationResult<User> {
        self.user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    /// Best-effort cleanup of the replaced asset. The new reference is
    /// already written; a failed delete is logged and swallowed.
    async fn delete_replaced_asset(&self, previous_url: Option<String>) {
        let Some(url) = previous_url else {
            return;
        };
        let Some(public_id) = public_id_from_url(&url) else {
            tracing::warn!(%url, "could not derive public id for replaced media");
            return;
        };
        if let Err(err) = self.media_store.delete_by_public_id(public_id).await {
            tracing::warn!(%public_id, error = %err, "failed to delete replaced media asset");
        }
    }
}
