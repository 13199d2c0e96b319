//! # koyomi
//!
//! Day-level calendar navigation in a fixed timezone and locale.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than the individual `koyomi-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use koyomi::prelude::*;
//!
//! let cal = Calendar::new("2016-01-17T09:05:12+09:00")?;
//! assert_eq!(cal.day_of_week(), "日");
//! assert_eq!(cal.next_holiday()?.format(), "2016-01-23T00:00:00+09:00");
//! assert_eq!(cal.previous_weekday()?.format(), "2016-01-15T00:00:00+09:00");
//! # Ok::<(), koyomi::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, locale, and settings.
pub use koyomi_core as core;

/// Holiday tables.
pub use koyomi_holidays as holidays;

/// Calendars and parsing.
pub use koyomi_time as time;

/// The items most programs need.
pub mod prelude {
    pub use koyomi_core::{Error, Locale, Result, Settings};
    pub use koyomi_holidays::{HolidayTable, JapaneseHolidays, NoHolidays};
    pub use koyomi_time::{Calendar, CalendarFactory, IntoInstant, WeekdayExt};
}
