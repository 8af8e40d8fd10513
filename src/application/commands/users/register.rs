use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        ports::media::MediaAsset,
    },
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub avatar: Option<MediaAsset>,
    pub cover_image: Option<MediaAsset>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        Self::ensure_required_fields(&command)?;

        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;

        let avatar = command
            .avatar
            .ok_or_else(|| ApplicationError::validation("avatar image is required"))?;

        self.ensure_identity_available(&username, &email).await?;

        let user = self
            .create_and_insert_user(
                username,
                email,
                command.full_name,
                &command.password,
                avatar,
                command.cover_image,
            )
            .await?;

        Ok(user.into())
    }

    fn ensure_required_fields(command: &RegisterUserCommand) -> ApplicationResult<()> {
        let required = [
            &command.full_name,
            &command.email,
            &command.username,
            &command.password,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ApplicationError::validation("all fields are required"));
        }
        Ok(())
    }

    async fn ensure_identity_available(
        &self,
        username: &Username,
        email: &Email,
    ) -> ApplicationResult<()> {
        let existing = self
            .user_repo
            .find_by_username_or_email(Some(username), Some(email))
            .await?;

        if existing.is_some() {
            return Err(ApplicationError::conflict(
                "user with this email or username already exists",
            ));
        }

        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        username: Username,
        email: Email,
        full_name: String,
        password: &str,
        avatar: MediaAsset,
        cover_image: Option<MediaAsset>,
    ) -> ApplicationResult<crate::domain::user::User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(
            username,
            email,
            full_name,
            password_hash,
            avatar.url,
            cover_image.map(|asset| asset.url),
            self.clock.now(),
        );

        let user = self.user_repo.insert(new_user).await?;
        Ok(user)
    }
}
