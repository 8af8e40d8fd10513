mod channel_profile;
mod current;
mod service;
mod watch_history;

pub use service::UserQueryService;
