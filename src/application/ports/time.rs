// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the current instant. Injected wherever output depends on "now"
/// so tests can pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
