//! Turning strings and date values into timezone-anchored instants.
//!
//! Input carrying a UTC offset is converted into the target timezone.
//! Input without one is read as wall-clock time in the target timezone.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use koyomi_core::errors::{Error, Result};

/// Offset-carrying layouts tried after RFC 3339.  `%#z` accepts `+09:00`,
/// `+0900` and `+09`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
];

/// Wall-clock layouts.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Date-only layouts, read as midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Parse `input` in one of the accepted ISO-8601-like layouts.
pub fn parse_flexible(input: &str, tz: Tz) -> Result<DateTime<Tz>> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&tz));
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(localize(tz, naive));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(localize(tz, start_of(date)));
        }
    }
    Err(Error::Parse {
        input: input.to_string(),
        format: None,
    })
}

/// Parse `input` strictly according to the `strftime` pattern `format`.
///
/// The pattern may describe a full timestamp with offset, a wall-clock
/// timestamp, or a bare date.
pub fn parse_with_format(input: &str, format: &str, tz: Tz) -> Result<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_str(input, format) {
        return Ok(dt.with_timezone(&tz));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
        return Ok(localize(tz, naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, format) {
        return Ok(localize(tz, start_of(date)));
    }
    Err(Error::Parse {
        input: input.to_string(),
        format: Some(format.to_string()),
    })
}

/// Midnight at the start of `date`.
pub(crate) fn start_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// The last representable millisecond of `date`.
pub(crate) fn end_of(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of(date))
}

/// Resolve a wall-clock time in `tz`.
///
/// Ambiguous times take the earlier instant; times inside a transition gap
/// move forward to the first valid quarter hour.
pub(crate) fn localize(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return dt;
    }
    let mut probe = naive;
    for _ in 0..96 {
        probe += Duration::minutes(15);
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return dt;
        }
    }
    tz.from_utc_datetime(&naive)
}

/// A value that can be turned into an instant in a given timezone.
///
/// Implemented for strings (flexible parsing) and for chrono date values,
/// so calendars can be built from either.
pub trait IntoInstant {
    /// Convert into an instant in `tz`.
    fn into_instant(self, tz: Tz) -> Result<DateTime<Tz>>;
}

impl IntoInstant for &str {
    fn into_instant(self, tz: Tz) -> Result<DateTime<Tz>> {
        parse_flexible(self, tz)
    }
}

impl IntoInstant for String {
    fn into_instant(self, tz: Tz) -> Result<DateTime<Tz>> {
        parse_flexible(&self, tz)
    }
}

impl IntoInstant for &String {
    fn into_instant(self, tz: Tz) -> Result<DateTime<Tz>> {
        parse_flexible(self, tz)
    }
}

impl<Z: TimeZone> IntoInstant for DateTime<Z> {
    fn into_instant(self, tz: Tz) -> Result<DateTime<Tz>> {
        Ok(self.with_timezone(&tz))
    }
}

impl IntoInstant for NaiveDateTime {
    fn into_instant(self, tz: Tz) -> Result<DateTime<Tz>> {
        Ok(localize(tz, self))
    }
}

impl IntoInstant for NaiveDate {
    fn into_instant(self, tz: Tz) -> Result<DateTime<Tz>> {
        Ok(localize(tz, start_of(self)))
    }
}
