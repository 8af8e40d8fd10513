// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source for `created_at` stamps. Commands take it as a port so tests
/// can pin the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
