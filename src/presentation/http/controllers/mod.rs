pub mod auth;
pub mod users;

mod multipart;
