// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::users::UserCommandService,
        ports::{
            media::MediaStore,
            security::{PasswordHasher, TokenService},
            time::Clock,
        },
        queries::users::UserQueryService,
    },
    domain::{
        channel::{SubscriptionRepository, VideoRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    token_service: Arc<dyn TokenService>,
    media_store: Arc<dyn MediaStore>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        video_repo: Arc<dyn VideoRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        media_store: Arc<dyn MediaStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_service),
            Arc::clone(&media_store),
            Arc::clone(&clock),
        ));

        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&subscription_repo),
            Arc::clone(&video_repo),
        ));

        Self {
            user_commands,
            user_queries,
            token_service,
            media_store,
        }
    }

    pub fn token_service(&self) -> Arc<dyn TokenService> {
        Arc::clone(&self.token_service)
    }

    pub fn media_store(&self) -> Arc<dyn MediaStore> {
        Arc::clone(&self.media_store)
    }
}
