use super::UserCommandService;
use crate::{
    application::{
        dto::TokenPairDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

impl UserCommandService {
    /// Mint a fresh access/refresh pair and persist the refresh token on the
    /// account, superseding whatever token was stored before (rotation).
    ///
    /// Not atomic: if either mint fails, the function returns before the
    /// store write, so a half-issued pair is never persisted.
    pub(super) async fn issue_token_pair(
        &self,
        user_id: UserId,
    ) -> ApplicationResult<TokenPairDto> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let access_token = self.token_service.issue_access_token(user_id).await?;
        let refresh_token = self.token_service.issue_refresh_token(user_id).await?;

        self.user_repo
            .set_refresh_token(user_id, Some(&refresh_token))
            .await?;

        Ok(TokenPairDto {
            access_token,
            refresh_token,
        })
    }
}
