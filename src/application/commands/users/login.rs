use super::UserCommandService;
use crate::{
    application::{
        dto::{TokenPairDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, Username},
};

pub struct LoginUserCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub user: UserDto,
    pub tokens: TokenPairDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(command.username, command.email, &command.password)
            .await?;

        let tokens = self.issue_token_pair(user.id).await?;

        Ok(LoginResult {
            user: user.into(),
            tokens,
        })
    }

    async fn find_and_authenticate_user(
        &self,
        username: Option<String>,
        email: Option<String>,
        password: &str,
    ) -> ApplicationResult<crate::domain::user::User> {
        let username = username
            .filter(|value| !value.trim().is_empty())
            .map(Username::new)
            .transpose()?;
        let email = email
            .filter(|value| !value.trim().is_empty())
            .map(Email::new)
            .transpose()?;

        if username.is_none() && email.is_none() {
            return Err(ApplicationError::validation(
                "username or email is required",
            ));
        }

        let user = self
            .user_repo
            .find_by_username_or_email(username.as_ref(), email.as_ref())
            .await?
            .ok_or_else(|| ApplicationError::not_found("user does not exist"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
