pub mod controllers;
pub mod cookies;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;
