use super::UserCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::user::UserId,
};

impl UserCommandService {
    /// Clears the stored refresh token unconditionally. Idempotent: logging
    /// out an already-logged-out account is a no-op, not an error.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.clear_refresh_token(actor.id).await
    }

    async fn clear_refresh_token(&self, user_id: UserId) -> ApplicationResult<()> {
        self.user_repo.set_refresh_token(user_id, None).await?;
        Ok(())
    }
}
