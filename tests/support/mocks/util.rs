// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, Default)]
pub struct FixedClock;

impl blog_gateway::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}
