// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now", injectable so signups get deterministic timestamps in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
