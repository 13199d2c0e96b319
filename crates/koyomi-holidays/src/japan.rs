//! Japan holiday table.

use std::sync::OnceLock;

use chrono::NaiveDate;
use holidays::Country;
use tracing::{debug, trace, warn};

use crate::holiday::{Holiday, HolidayTable};

/// First year loaded from the holiday data.
pub const FIRST_YEAR: i32 = 2000;

/// Last year loaded from the holiday data.
pub const LAST_YEAR: i32 = 2049;

/// Load the Japanese data into the `holidays` database once per process.
///
/// Returns `false` if loading failed; every lookup then answers "not a
/// holiday".
fn loaded() -> bool {
    static LOADED: OnceLock<bool> = OnceLock::new();
    *LOADED.get_or_init(|| {
        match holidays::Builder::new()
            .countries(&[Country::JP])
            .years(FIRST_YEAR..LAST_YEAR + 1)
            .init()
        {
            Ok(()) => {
                debug!(first = FIRST_YEAR, last = LAST_YEAR, "japanese holiday data loaded");
                true
            }
            Err(err) => {
                warn!(%err, "japanese holiday data unavailable");
                false
            }
        }
    })
}

/// National holidays of Japan (国民の祝日), including substitute holidays
/// (振替休日) and citizens' holidays (国民の休日).
///
/// Lookups are served by the `holidays` crate for [`FIRST_YEAR`] through
/// [`LAST_YEAR`].  Weekends are not part of the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseHolidays;

impl HolidayTable for JapaneseHolidays {
    fn name(&self) -> &str {
        "Japan"
    }

    fn holiday(&self, date: NaiveDate) -> Option<Holiday> {
        if !self.covers(date) || !loaded() {
            return None;
        }
        match holidays::get(Country::JP, date) {
            Ok(found) => found.map(|h| Holiday::new(date, h.name)),
            Err(err) => {
                trace!(%date, %err, "holiday lookup failed");
                None
            }
        }
    }

    fn coverage(&self) -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(FIRST_YEAR, 1, 1).unwrap_or(NaiveDate::MIN),
            NaiveDate::from_ymd_opt(LAST_YEAR, 12, 31).unwrap_or(NaiveDate::MAX),
        )
    }
}
