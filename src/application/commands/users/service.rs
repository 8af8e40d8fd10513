use std::sync::Arc;

use crate::application::ports::{
    media::MediaStore,
    security::{PasswordHasher, TokenService},
    time::Clock,
};
use crate::domain::user::UserRepository;

/// Session manager: owns the login/logout/refresh/password-change flows and
/// the single-active-refresh-token invariant.
pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_service: Arc<dyn TokenService>,
    pub(super) media_store: Arc<dyn MediaStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        media_store: Arc<dyn MediaStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_service,
            media_store,
            clock,
        }
    }
}
