//! # koyomi-time
//!
//! Timezone-anchored calendar instants with day navigation (today, tomorrow,
//! month boundaries, next/previous holiday or weekday) and holiday/weekday
//! classification.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The `Calendar` type.
pub mod calendar;

/// `CalendarFactory` for calendars sharing one configuration.
pub mod factory;

/// Parsing strings and chrono values into instants.
pub mod parse;

/// Sunday-first weekday helpers.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, DEFAULT_FORMAT};
pub use factory::CalendarFactory;
pub use parse::{parse_flexible, parse_with_format, IntoInstant};
pub use weekday::WeekdayExt;
