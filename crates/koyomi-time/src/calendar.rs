//! `Calendar` — one instant in a fixed timezone, with day navigation and
//! holiday/weekday classification.
//!
//! Every calendar is immutable: navigation returns a new calendar and the
//! receiver keeps its instant.  Day-level questions are answered from the
//! start of the instant's calendar day, so the time of day never changes a
//! classification.
//!
//! ```
//! use koyomi_time::Calendar;
//!
//! let cal = Calendar::new("2016-01-16T09:05:12+09:00").unwrap();
//! assert!(cal.is_holiday());
//! assert_eq!(cal.next_weekday().unwrap().format(), "2016-01-18T00:00:00+09:00");
//! assert_eq!(cal.format(), "2016-01-16T09:05:12+09:00");
//! ```

use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use koyomi_core::errors::{Error, Result};
use koyomi_core::Settings;
use koyomi_holidays::{Holiday, HolidayTable, JapaneseHolidays};
use tracing::{debug, trace};

use crate::parse::{self, IntoInstant};
use crate::weekday::WeekdayExt;

/// ISO 8601 with a `±HH:MM` offset, the default rendering.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Direction of a day-by-day search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

impl Step {
    fn apply(self, date: NaiveDate) -> Result<NaiveDate> {
        match self {
            Step::Forward => date
                .succ_opt()
                .ok_or_else(|| Error::OutOfRange(format!("no day after {date}"))),
            Step::Backward => date
                .pred_opt()
                .ok_or_else(|| Error::OutOfRange(format!("no day before {date}"))),
        }
    }
}

/// A timezone-anchored instant with calendar-day navigation.
#[derive(Debug, Clone)]
pub struct Calendar {
    instant: DateTime<Tz>,
    settings: Settings,
    holidays: Arc<dyn HolidayTable>,
}

// ── Constructors ──────────────────────────────────────────────────────────────

impl Calendar {
    /// The current instant, in `Asia/Tokyo` with the Japanese holiday table.
    pub fn now() -> Self {
        Self::now_with(Settings::default(), Arc::new(JapaneseHolidays))
    }

    /// Parse `date` (a string or a chrono date value) in the reference
    /// configuration.
    pub fn new(date: impl IntoInstant) -> Result<Self> {
        Self::new_with(date, Settings::default(), Arc::new(JapaneseHolidays))
    }

    /// Parse `date` strictly with the `strftime` pattern `format` in the
    /// reference configuration.
    pub fn with_format(date: &str, format: &str) -> Result<Self> {
        Self::with_format_with(date, format, Settings::default(), Arc::new(JapaneseHolidays))
    }

    /// The current instant under explicit settings and holiday table.
    pub fn now_with(settings: Settings, holidays: Arc<dyn HolidayTable>) -> Self {
        let instant = Utc::now().with_timezone(&settings.timezone());
        Self::from_parts(instant, settings, holidays)
    }

    /// Parse `date` under explicit settings and holiday table.
    pub fn new_with(
        date: impl IntoInstant,
        settings: Settings,
        holidays: Arc<dyn HolidayTable>,
    ) -> Result<Self> {
        let instant = date.into_instant(settings.timezone())?;
        Ok(Self::from_parts(instant, settings, holidays))
    }

    /// Parse `date` with `format` under explicit settings and holiday table.
    pub fn with_format_with(
        date: &str,
        format: &str,
        settings: Settings,
        holidays: Arc<dyn HolidayTable>,
    ) -> Result<Self> {
        let instant = parse::parse_with_format(date, format, settings.timezone())?;
        Ok(Self::from_parts(instant, settings, holidays))
    }

    pub(crate) fn from_parts(
        instant: DateTime<Tz>,
        settings: Settings,
        holidays: Arc<dyn HolidayTable>,
    ) -> Self {
        trace!(%instant, tz = settings.timezone().name(), "calendar constructed");
        Calendar {
            instant,
            settings,
            holidays,
        }
    }

    /// A calendar sharing this one's settings and table.
    fn with_instant(&self, instant: DateTime<Tz>) -> Self {
        Calendar {
            instant,
            settings: self.settings,
            holidays: Arc::clone(&self.holidays),
        }
    }

    fn at_start_of(&self, date: NaiveDate) -> Self {
        self.with_instant(parse::localize(self.settings.timezone(), parse::start_of(date)))
    }
}

// ── Accessors ─────────────────────────────────────────────────────────────────

impl Calendar {
    /// A copy of the wrapped instant.
    pub fn datetime(&self) -> DateTime<Tz> {
        self.instant
    }

    /// The calendar day of the instant in the configured timezone.
    pub fn date(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// The settings this calendar was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The holiday table this calendar consults.
    pub fn holidays(&self) -> &dyn HolidayTable {
        self.holidays.as_ref()
    }

    /// The weekday of the calendar day.
    pub fn weekday(&self) -> Weekday {
        self.date().weekday()
    }

    /// Weekday index with Sunday = 0 … Saturday = 6.
    pub fn weekday_index(&self) -> u32 {
        self.weekday().index()
    }

    /// The designated holiday on this calendar day, if any.
    pub fn holiday(&self) -> Option<Holiday> {
        self.holidays.holiday(self.date())
    }

    /// The name of the designated holiday on this calendar day, if any.
    pub fn holiday_name(&self) -> Option<String> {
        self.holiday().map(|h| h.name().to_string())
    }

    /// Return `true` if both calendars fall on the same calendar day of this
    /// calendar's timezone.
    pub fn is_same_day(&self, other: &Calendar) -> bool {
        let tz = self.settings.timezone();
        self.date() == other.instant.with_timezone(&tz).date_naive()
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

impl Calendar {
    /// Render in the default ISO 8601 format, e.g. `2016-01-01T09:10:00+09:00`.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Render with a `strftime` pattern in the configured locale.
    pub fn format_with(&self, pattern: &str) -> Result<String> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidFormat(pattern.to_string()));
        }
        let locale = self.settings.locale().chrono_locale();
        let mut out = String::new();
        write!(out, "{}", self.instant.format_localized(pattern, locale))
            .map_err(|_| Error::InvalidFormat(pattern.to_string()))?;
        Ok(out)
    }

    /// The minimal localized weekday name of the calendar day (`月`, `Mo`, ...).
    pub fn day_of_week(&self) -> &'static str {
        self.settings.locale().weekday_short(self.weekday())
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instant.format(DEFAULT_FORMAT))
    }
}

impl FromStr for Calendar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Calendar::new(s)
    }
}

// ── Navigation ────────────────────────────────────────────────────────────────

impl Calendar {
    /// Midnight at the start of this calendar day.
    pub fn today(&self) -> Self {
        self.at_start_of(self.date())
    }

    /// Midnight at the start of the following calendar day.
    pub fn tomorrow(&self) -> Result<Self> {
        Ok(self.at_start_of(Step::Forward.apply(self.date())?))
    }

    /// Midnight at the start of the preceding calendar day.
    pub fn yesterday(&self) -> Result<Self> {
        Ok(self.at_start_of(Step::Backward.apply(self.date())?))
    }

    /// Midnight on the first day of this calendar month.
    pub fn start_of_month(&self) -> Self {
        self.at_start_of(self.date().with_day(1).unwrap_or_else(|| self.date()))
    }

    /// The last millisecond (23:59:59.999) of the last day of this month.
    pub fn end_of_month(&self) -> Self {
        let last = last_day_of_month(self.date());
        self.with_instant(parse::localize(self.settings.timezone(), parse::end_of(last)))
    }

    /// The nearest holiday strictly after this day.
    pub fn next_holiday(&self) -> Result<Self> {
        self.scan(Step::Forward, true, "next holiday")
    }

    /// The nearest holiday strictly before this day.
    pub fn previous_holiday(&self) -> Result<Self> {
        self.scan(Step::Backward, true, "previous holiday")
    }

    /// The nearest weekday strictly after this day.
    pub fn next_weekday(&self) -> Result<Self> {
        self.scan(Step::Forward, false, "next weekday")
    }

    /// The nearest weekday strictly before this day.
    pub fn previous_weekday(&self) -> Result<Self> {
        self.scan(Step::Backward, false, "previous weekday")
    }

    /// Walk one day at a time from the neighbouring day until a day whose
    /// holiday status equals `want_holiday`, visiting at most
    /// `scan_limit` days.
    fn scan(&self, step: Step, want_holiday: bool, search: &'static str) -> Result<Self> {
        let limit = self.settings.scan_limit();
        let mut candidate = step.apply(self.date())?;
        let mut visited = 1;
        while self.is_holiday_on(candidate) != want_holiday {
            if visited >= limit {
                debug!(search, from = %self.date(), limit, "scan limit reached");
                return Err(Error::ScanLimitExceeded { search, limit });
            }
            trace!(search, %candidate, "skipping");
            candidate = step.apply(candidate)?;
            visited += 1;
        }
        debug!(search, from = %self.date(), found = %candidate, visited, "scan finished");
        Ok(self.at_start_of(candidate))
    }
}

// ── Classification ────────────────────────────────────────────────────────────

impl Calendar {
    /// Return `true` if this day is a designated holiday or falls on a
    /// Saturday or Sunday.
    pub fn is_holiday(&self) -> bool {
        self.is_holiday_on(self.date())
    }

    /// Return `true` if this day is not a holiday.
    pub fn is_weekday(&self) -> bool {
        !self.is_holiday()
    }

    /// Return `true` on the first calendar day of the month.
    pub fn is_start_of_month(&self) -> bool {
        self.today().is_same_day(&self.start_of_month())
    }

    /// Return `true` on the last calendar day of the month.
    pub fn is_end_of_month(&self) -> bool {
        self.today().is_same_day(&self.end_of_month())
    }

    fn is_holiday_on(&self, date: NaiveDate) -> bool {
        date.weekday().is_weekend() || self.holidays.is_holiday(date)
    }
}

/// The last day of `date`'s month.
fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    (28..=31)
        .rev()
        .find_map(|day| date.with_day(day))
        .unwrap_or(date)
}
