use chrono::{DateTime, FixedOffset};

/// Symbolic period selector used by date-range filters.
///
/// Held in filter state per view and reset with the other filters, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateBucket {
    #[default]
    None,
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    Custom {
        from: Option<DateTime<FixedOffset>>,
        to: Option<DateTime<FixedOffset>>,
    },
}

/// Concrete interval a bucket resolves to. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

// --

impl DateBucket {
    pub fn custom(from: Option<DateTime<FixedOffset>>, to: Option<DateTime<FixedOffset>>) -> Self {
        DateBucket::Custom { from, to }
    }
}

impl DateInterval {
    pub fn contains(&self, t: &DateTime<FixedOffset>) -> bool {
        self.start <= *t && *t <= self.end
    }
}
