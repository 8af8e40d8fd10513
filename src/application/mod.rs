//! Use-case layer: `commands` mutate accounts and sessions, `queries` build
//! the read models, `ports` declare the outward-facing seams (hashing,
//! tokens, media, time) that the infrastructure layer fills in.

pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
