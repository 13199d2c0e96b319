//! `CalendarFactory` — builds calendars that share one configuration.

use std::sync::Arc;

use koyomi_core::errors::Result;
use koyomi_core::Settings;
use koyomi_holidays::{HolidayTable, JapaneseHolidays};
use tracing::debug;

use crate::calendar::Calendar;
use crate::parse::IntoInstant;

/// Holds settings and a holiday table and stamps out calendars with them.
///
/// Cloning is cheap; the table is shared.
///
/// ```
/// use std::sync::Arc;
/// use koyomi_core::Settings;
/// use koyomi_holidays::NoHolidays;
/// use koyomi_time::CalendarFactory;
///
/// let settings = Settings::builder().timezone("UTC").locale("en").build().unwrap();
/// let factory = CalendarFactory::new(settings, Arc::new(NoHolidays));
/// let cal = factory.date("2016-02-01").unwrap();
/// assert_eq!(cal.day_of_week(), "Mo");
/// assert_eq!(cal.format(), "2016-02-01T00:00:00+00:00");
/// ```
#[derive(Debug, Clone)]
pub struct CalendarFactory {
    settings: Settings,
    holidays: Arc<dyn HolidayTable>,
}

impl CalendarFactory {
    /// A factory for the given settings and table.
    pub fn new(settings: Settings, holidays: Arc<dyn HolidayTable>) -> Self {
        debug!(
            tz = settings.timezone().name(),
            locale = %settings.locale(),
            table = holidays.name(),
            "calendar factory configured"
        );
        CalendarFactory { settings, holidays }
    }

    /// `Asia/Tokyo`, `ja`, and the Japanese national holiday table.
    pub fn japan() -> Self {
        Self::new(Settings::default(), Arc::new(JapaneseHolidays))
    }

    /// The settings handed to every calendar.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The current instant.
    pub fn now(&self) -> Calendar {
        Calendar::now_with(self.settings, Arc::clone(&self.holidays))
    }

    /// A calendar for `date` (a string or a chrono date value).
    pub fn date(&self, date: impl IntoInstant) -> Result<Calendar> {
        Calendar::new_with(date, self.settings, Arc::clone(&self.holidays))
    }

    /// A calendar for `date` parsed strictly with the `strftime` pattern `format`.
    pub fn date_with_format(&self, date: &str, format: &str) -> Result<Calendar> {
        Calendar::with_format_with(date, format, self.settings, Arc::clone(&self.holidays))
    }
}

impl Default for CalendarFactory {
    fn default() -> Self {
        Self::japan()
    }
}
