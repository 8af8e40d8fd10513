pub mod repository;
pub mod video;

pub use repository::{SubscriptionRepository, VideoRepository};
pub use video::{Video, VideoId, WatchHistoryEntry};
