// src/infrastructure/repositories/postgres_video.rs
use super::map_sqlx;
use crate::domain::channel::{Video, VideoId, VideoRepository, WatchHistoryEntry};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WatchHistoryRow {
    video_id: i64,
    owner_id: i64,
    title: String,
    thumbnail: String,
    video_file: String,
    duration_secs: f64,
    views: i64,
    created_at: DateTime<Utc>,
    owner_full_name: String,
    owner_username: String,
    owner_avatar: String,
}

impl TryFrom<WatchHistoryRow> for WatchHistoryEntry {
    type Error = DomainError;

    fn try_from(row: WatchHistoryRow) -> Result<Self, Self::Error> {
        Ok(WatchHistoryEntry {
            video: Video {
                id: VideoId::new(row.video_id)?,
                owner_id: UserId::new(row.owner_id)?,
                title: row.title,
                thumbnail: row.thumbnail,
                video_file: row.video_file,
                duration_secs: row.duration_secs,
                views: row.views,
                created_at: row.created_at,
            },
            owner_full_name: row.owner_full_name,
            owner_username: row.owner_username,
            owner_avatar: row.owner_avatar,
        })
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    // The ordered join behind the watch-history read model: history rows in
    // insertion order, each resolved to its video and the owner's public
    // fields. Duplicate video ids stay duplicated.
    async fn watch_history_for(&self, user_id: UserId) -> DomainResult<Vec<WatchHistoryEntry>> {
        let rows = sqlx::query_as::<_, WatchHistoryRow>(
            "SELECT v.id AS video_id, v.owner_id, v.title, v.thumbnail, v.video_file,
                    v.duration_secs, v.views, v.created_at,
                    o.full_name AS owner_full_name, o.username AS owner_username,
                    o.avatar AS owner_avatar
             FROM watch_history wh
             JOIN videos v ON v.id = wh.video_id
             JOIN users o ON o.id = v.owner_id
             WHERE wh.user_id = $1
             ORDER BY wh.id ASC",
        )
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(WatchHistoryEntry::try_from).collect()
    }
}
