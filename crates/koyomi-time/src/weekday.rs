//! Weekday helpers on top of [`chrono::Weekday`].

use chrono::Weekday;

/// Sunday-first indexing and weekend tests for [`chrono::Weekday`].
pub trait WeekdayExt {
    /// Index with Sunday = 0 … Saturday = 6.
    fn index(&self) -> u32;

    /// Return `true` if this is Saturday or Sunday.
    fn is_weekend(&self) -> bool;

    /// Return `true` if this is Monday–Friday.
    fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }
}

impl WeekdayExt for Weekday {
    fn index(&self) -> u32 {
        self.num_days_from_sunday()
    }

    fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Sat | Weekday::Sun)
    }
}
