use crate::domain::channel::{Video, WatchHistoryEntry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized channel view: public profile fields plus the two
/// subscription counts and the caller's own subscription flag. The fixed
/// projection means the password hash and refresh token can never appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfileDto {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub subscribers_count: u64,
    pub subscribed_to_count: u64,
    pub is_subscribed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDto {
    pub id: i64,
    pub title: String,
    pub thumbnail: String,
    pub video_file: String,
    pub duration_secs: f64,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// Owner sub-record on a watch-history entry: public fields only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOwnerDto {
    pub full_name: String,
    pub username: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchHistoryEntryDto {
    #[serde(flatten)]
    pub video: VideoDto,
    pub owner: VideoOwnerDto,
}

impl From<Video> for VideoDto {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.into(),
            title: video.title,
            thumbnail: video.thumbnail,
            video_file: video.video_file,
            duration_secs: video.duration_secs,
            views: video.views,
            created_at: video.created_at,
        }
    }
}

impl From<WatchHistoryEntry> for WatchHistoryEntryDto {
    fn from(entry: WatchHistoryEntry) -> Self {
        Self {
            video: entry.video.into(),
            owner: VideoOwnerDto {
                full_name: entry.owner_full_name,
                username: entry.owner_username,
                avatar: entry.owner_avatar,
            },
        }
    }
}
