use super::UserCommandService;
use crate::application::{
    dto::TokenPairDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct RefreshSessionCommand {
    pub refresh_token: Option<String>,
}

impl UserCommandService {
    /// Exchange a valid refresh token for a new access/refresh pair.
    ///
    /// A refresh token is single-use-until-rotated: beyond signature and
    /// expiry, the presented token must equal the one stored on the account.
    /// A token that verifies but no longer matches has been rotated out
    /// (or the account logged out) and is rejected outright.
    ///
    /// Two concurrent refreshes with the same still-valid token can both pass
    /// the equality check before either write lands; last write wins and the
    /// losing pair only finds out at its next refresh. Known race, accepted.
    pub async fn refresh_session(
        &self,
        command: RefreshSessionCommand,
    ) -> ApplicationResult<TokenPairDto> {
        let presented = command
            .refresh_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApplicationError::unauthorized("unauthorized request"))?;

        let claims = self.token_service.verify_refresh_token(&presented).await?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid refresh token"))?;

        if user.refresh_token.as_deref() != Some(presented.as_str()) {
            return Err(ApplicationError::unauthorized(
                "refresh token is expired or already used",
            ));
        }

        self.issue_token_pair(user.id).await
    }
}
