pub mod channel;
pub mod errors;
pub mod user;
