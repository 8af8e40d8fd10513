use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserUpdate, Username},
};

pub struct UpdateAccountCommand {
    pub full_name: Option<String>,
    pub username: Option<String>,
}

impl UserCommandService {
    /// Partial profile update: only the supplied fields change.
    pub async fn update_account(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateAccountCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::new(actor.id);

        if let Some(full_name) = command.full_name.filter(|name| !name.trim().is_empty()) {
            update = update.with_full_name(full_name.trim());
        }
        if let Some(username) = command.username.filter(|name| !name.trim().is_empty()) {
            update = update.with_username(Username::new(username)?);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field is required to update",
            ));
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}
