//! `Holiday` entries and the `HolidayTable` lookup trait.

use chrono::NaiveDate;

/// One designated holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Holiday {
    date: NaiveDate,
    name: String,
}

impl Holiday {
    /// A holiday called `name` on `date`.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Holiday {
            date,
            name: name.into(),
        }
    }

    /// The calendar date of the holiday.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The name reported by the table.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A lookup of designated holidays.
///
/// Implementations answer membership questions and never need to know about
/// weekends.  Dates outside [`coverage`](Self::coverage) are reported as
/// "not a holiday".
pub trait HolidayTable: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Japan"`).
    fn name(&self) -> &str;

    /// The holiday on `date`, if any.
    fn holiday(&self, date: NaiveDate) -> Option<Holiday>;

    /// First and last date (inclusive) the table has data for.
    fn coverage(&self) -> (NaiveDate, NaiveDate);

    /// Return `true` if `date` is a designated holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday(date).is_some()
    }

    /// Return `true` if `date` lies within [`coverage`](Self::coverage).
    fn covers(&self, date: NaiveDate) -> bool {
        let (first, last) = self.coverage();
        (first..=last).contains(&date)
    }

    /// All holidays in `[from, to]` within coverage, in ascending order.
    ///
    /// Empty when `from > to`.
    fn between(&self, from: NaiveDate, to: NaiveDate) -> Vec<Holiday> {
        let (first, last) = self.coverage();
        let (start, end) = (from.max(first), to.min(last));
        if start > end {
            return Vec::new();
        }
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .filter_map(|d| self.holiday(d))
            .collect()
    }
}

/// A table without any holidays.
///
/// Calendars built on it classify only Saturdays and Sundays as holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayTable for NoHolidays {
    fn name(&self) -> &str {
        "None"
    }

    fn holiday(&self, _date: NaiveDate) -> Option<Holiday> {
        None
    }

    fn coverage(&self) -> (NaiveDate, NaiveDate) {
        (NaiveDate::MIN, NaiveDate::MAX)
    }

    fn between(&self, _from: NaiveDate, _to: NaiveDate) -> Vec<Holiday> {
        Vec::new()
    }
}
