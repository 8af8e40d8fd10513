// src/domain/channel/video.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoId(pub i64);

impl VideoId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("video id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<VideoId> for i64 {
    fn from(value: VideoId) -> Self {
        value.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published video, consumed read-only when resolving watch history.
#[derive(Debug, Clone)]
pub struct Video {
    pub id: VideoId,
    pub owner_id: UserId,
    pub title: String,
    pub thumbnail: String,
    pub video_file: String,
    pub duration_secs: f64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// A watch-history row joined with its video and the video owner's public
/// fields. Ordering and duplicates follow the viewing sequence.
#[derive(Debug, Clone)]
pub struct WatchHistoryEntry {
    pub video: Video,
    pub owner_full_name: String,
    pub owner_username: String,
    pub owner_avatar: String,
}
