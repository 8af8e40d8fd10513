// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use vidtube_core::application::error::{ApplicationError, ApplicationResult};
use vidtube_core::application::ports::media::{MediaAsset, MediaStore};
use vidtube_core::application::ports::security::PasswordHasher;
use vidtube_core::application::ports::time::Clock;
use vidtube_core::application::services::ApplicationServices;
use vidtube_core::domain::channel::{
    SubscriptionRepository, Video, VideoId, VideoRepository, WatchHistoryEntry,
};
use vidtube_core::domain::errors::{DomainError, DomainResult};
use vidtube_core::domain::user::{
    Email, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate, Username,
};
use vidtube_core::infrastructure::security::JwtTokenService;

pub struct InMemoryUserRepo {
    users: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn stored_refresh_token(&self, id: i64) -> Option<String> {
        let users = self.users.lock().unwrap();
        users.get(&id).and_then(|user| user.refresh_token.clone())
    }

    pub fn stored_password_hash(&self, id: i64) -> Option<String> {
        let users = self.users.lock().unwrap();
        users
            .get(&id)
            .map(|user| user.password_hash.as_str().to_owned())
    }

    pub fn stored_avatar(&self, id: i64) -> Option<String> {
        let users = self.users.lock().unwrap();
        users.get(&id).map(|user| user.avatar.clone())
    }
}

impl Default for InMemoryUserRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();

        let duplicate = users.values().any(|user| {
            user.username.as_str() == new_user.username.as_str()
                || user.email.as_str() == new_user.email.as_str()
        });
        if duplicate {
            return Err(DomainError::Conflict(
                "username or email already exists".into(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            full_name: new_user.full_name,
            password_hash: new_user.password_hash,
            avatar: new_user.avatar,
            cover_image: new_user.cover_image,
            refresh_token: None,
            created_at: new_user.created_at,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|user| user.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|user| {
                username.is_some_and(|u| user.username.as_str() == u.as_str())
                    || email.is_some_and(|e| user.email.as_str() == e.as_str())
            })
            .cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(full_name) = update.full_name {
            user.full_name = full_name;
        }
        if let Some(username) = update.username {
            user.username = username;
        }
        Ok(user.clone())
    }

    async fn set_refresh_token(&self, id: UserId, token: Option<&str>) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.refresh_token = token.map(ToOwned::to_owned);
        Ok(())
    }

    async fn set_password_hash(&self, id: UserId, hash: &PasswordHash) -> DomainResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.password_hash = hash.clone();
        Ok(())
    }

    async fn set_avatar(&self, id: UserId, url: &str) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.avatar = url.to_owned();
        Ok(user.clone())
    }

    async fn set_cover_image(&self, id: UserId, url: &str) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.cover_image = Some(url.to_owned());
        Ok(user.clone())
    }
}

#[derive(Default)]
pub struct InMemorySubscriptionRepo {
    pub edges: Mutex<Vec<(i64, i64)>>,
}

impl InMemorySubscriptionRepo {
    pub fn subscribe(&self, subscriber_id: i64, channel_id: i64) {
        self.edges.lock().unwrap().push((subscriber_id, channel_id));
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepo {
    async fn count_subscribers(&self, channel_id: UserId) -> DomainResult<u64> {
        let edges = self.edges.lock().unwrap();
        Ok(edges
            .iter()
            .filter(|(_, channel)| *channel == i64::from(channel_id))
            .count() as u64)
    }

    async fn count_subscribed_to(&self, user_id: UserId) -> DomainResult<u64> {
        let edges = self.edges.lock().unwrap();
        Ok(edges
            .iter()
            .filter(|(subscriber, _)| *subscriber == i64::from(user_id))
            .count() as u64)
    }

    async fn is_subscribed(
        &self,
        subscriber_id: UserId,
        channel_id: UserId,
    ) -> DomainResult<bool> {
        let edges = self.edges.lock().unwrap();
        Ok(edges
            .iter()
            .any(|edge| *edge == (i64::from(subscriber_id), i64::from(channel_id))))
    }
}

#[derive(Default)]
pub struct InMemoryVideoRepo {
    pub videos: Mutex<HashMap<i64, (Video, String, String, String)>>,
    pub history: Mutex<Vec<(i64, i64)>>,
}

impl InMemoryVideoRepo {
    pub fn add_video(&self, id: i64, owner_id: i64, title: &str, owner_username: &str) {
        let video = Video {
            id: VideoId::new(id).unwrap(),
            owner_id: UserId::new(owner_id).unwrap(),
            title: title.to_owned(),
            thumbnail: format!("https://media.test/thumb-{id}.png"),
            video_file: format!("https://media.test/video-{id}.mp4"),
            duration_secs: 60.0,
            views: 0,
            created_at: Utc::now(),
        };
        self.videos.lock().unwrap().insert(
            id,
            (
                video,
                format!("Owner {owner_id}"),
                owner_username.to_owned(),
                format!("https://media.test/avatar-{owner_id}.png"),
            ),
        );
    }

    pub fn record_view(&self, user_id: i64, video_id: i64) {
        self.history.lock().unwrap().push((user_id, video_id));
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepo {
    async fn watch_history_for(&self, user_id: UserId) -> DomainResult<Vec<WatchHistoryEntry>> {
        let videos = self.videos.lock().unwrap();
        let history = self.history.lock().unwrap();

        history
            .iter()
            .filter(|(viewer, _)| *viewer == i64::from(user_id))
            .map(|(_, video_id)| {
                let (video, full_name, username, avatar) = videos
                    .get(video_id)
                    .cloned()
                    .ok_or_else(|| DomainError::NotFound("video not found".into()))?;
                Ok(WatchHistoryEntry {
                    video,
                    owner_full_name: full_name,
                    owner_username: username,
                    owner_avatar: avatar,
                })
            })
            .collect()
    }
}

/// Transparent "hash" so tests can avoid argon2 work.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        // Mirrors the real hasher: a stored hash in an unknown format is a
        // dependency failure, not a bad credential.
        if !expected_hash.starts_with("hashed::") {
            return Err(ApplicationError::infrastructure(
                "stored password hash is unreadable",
            ));
        }
        if format!("hashed::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Records deletions; uploads mint deterministic URLs.
#[derive(Default)]
pub struct RecordingMediaStore {
    pub deleted: Mutex<Vec<String>>,
    pub fail_deletes: bool,
}

impl RecordingMediaStore {
    pub fn failing_deletes() -> Self {
        Self {
            deleted: Mutex::new(Vec::new()),
            fail_deletes: true,
        }
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStore for RecordingMediaStore {
    async fn upload(&self, file_name: &str, _bytes: Bytes) -> ApplicationResult<MediaAsset> {
        let public_id = file_name
            .split('.')
            .next()
            .unwrap_or(file_name)
            .to_owned();
        Ok(MediaAsset {
            url: format!("https://media.test/uploads/{file_name}"),
            public_id,
        })
    }

    async fn delete_by_public_id(&self, public_id: &str) -> ApplicationResult<()> {
        if self.fail_deletes {
            return Err(ApplicationError::infrastructure("storage unavailable"));
        }
        self.deleted.lock().unwrap().push(public_id.to_owned());
        Ok(())
    }
}

pub struct TestHarness {
    pub services: ApplicationServices,
    pub user_repo: Arc<InMemoryUserRepo>,
    pub subscription_repo: Arc<InMemorySubscriptionRepo>,
    pub video_repo: Arc<InMemoryVideoRepo>,
    pub media_store: Arc<RecordingMediaStore>,
}

pub fn harness() -> TestHarness {
    harness_with_media(Arc::new(RecordingMediaStore::default()))
}

pub fn harness_with_media(media_store: Arc<RecordingMediaStore>) -> TestHarness {
    let user_repo = Arc::new(InMemoryUserRepo::new());
    let subscription_repo = Arc::new(InMemorySubscriptionRepo::default());
    let video_repo = Arc::new(InMemoryVideoRepo::default());

    let token_service = Arc::new(JwtTokenService::new(
        "test-access-secret",
        Duration::from_secs(900),
        "test-refresh-secret",
        Duration::from_secs(86_400),
    ));

    let services = ApplicationServices::new(
        Arc::clone(&user_repo) as Arc<dyn UserRepository>,
        Arc::clone(&subscription_repo) as Arc<dyn SubscriptionRepository>,
        Arc::clone(&video_repo) as Arc<dyn VideoRepository>,
        Arc::new(PlainPasswordHasher),
        token_service,
        Arc::clone(&media_store) as Arc<dyn MediaStore>,
        Arc::new(FixedClock(Utc::now())),
    );

    TestHarness {
        services,
        user_repo,
        subscription_repo,
        video_repo,
        media_store,
    }
}

pub fn register_command(username: &str, email: &str) -> RegisterUserCommandBuilder {
    RegisterUserCommandBuilder {
        full_name: format!("{username} person"),
        email: email.to_owned(),
        username: username.to_owned(),
        password: "chai-and-code".to_owned(),
    }
}

pub struct RegisterUserCommandBuilder {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegisterUserCommandBuilder {
    pub fn build(self) -> vidtube_core::application::commands::users::RegisterUserCommand {
        let avatar = MediaAsset {
            url: format!("https://media.test/uploads/{}-avatar.png", self.username),
            public_id: format!("{}-avatar", self.username),
        };
        vidtube_core::application::commands::users::RegisterUserCommand {
            full_name: self.full_name,
            email: self.email,
            username: self.username,
            password: self.password,
            avatar: Some(avatar),
            cover_image: None,
        }
    }
}

pub fn actor(id: i64) -> vidtube_core::application::dto::AuthenticatedUser {
    vidtube_core::application::dto::AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        issued_at: Utc::now(),
        expires_at: Utc::now() + chrono::Duration::minutes(15),
    }
}
