use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// Fresh sanitized view of the caller's own account.
    pub async fn get_current_user(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(user.into())
    }
}
