pub mod auth;
pub mod channel;
pub mod users;

pub use auth::{AuthenticatedUser, TokenClaims, TokenPairDto};
pub use channel::{ChannelProfileDto, VideoDto, VideoOwnerDto, WatchHistoryEntryDto};
pub use users::UserDto;
