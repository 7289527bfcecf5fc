use chrono::{DateTime, FixedOffset, Local};

/// Source of the current instant. The offset of the returned time defines
/// "local" for midnight-based period filters.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

pub struct SystemClock;

/// Always returns the same instant. Useful for reproducible views and tests.
pub struct FixedClock(pub DateTime<FixedOffset>);

// --

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
