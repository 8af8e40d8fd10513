use super::UserCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::PasswordHash;

pub struct ChangePasswordCommand {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl UserCommandService {
    /// The confirm mismatch is checked before anything else, so a mismatch
    /// reports as validation even when the old password is also wrong.
    pub async fn change_password(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        if command.new_password != command.confirm_password {
            return Err(ApplicationError::validation(
                "new password and confirm password must match",
            ));
        }

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        // Only a genuine mismatch gets the friendlier message; hasher
        // failures (e.g. an unreadable stored hash) pass through as-is.
        self.password_hasher
            .verify(&command.old_password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized("invalid old password")
                }
                other => other,
            })?;

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        self.user_repo
            .set_password_hash(user.id, &password_hash)
            .await?;

        Ok(())
    }
}
