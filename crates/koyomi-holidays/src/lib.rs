//! # koyomi-holidays
//!
//! Holiday-table lookups.
//!
//! A table only answers "is this date a designated holiday?".  Weekend
//! handling and day navigation live in `koyomi-time`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Holiday` entries and the `HolidayTable` trait.
pub mod holiday;

/// Japanese national holidays from the `holidays` crate.
pub mod japan;

pub use holiday::{Holiday, HolidayTable, NoHolidays};
pub use japan::{JapaneseHolidays, FIRST_YEAR, LAST_YEAR};
