//! Calendar settings.
//!
//! [`Settings`] carries the timezone, locale, and search limit that every
//! calendar instance is evaluated in.  It is an ordinary value passed in at
//! construction time; there is no process-wide state to set or reset.
//!
//! ```
//! use koyomi_core::{Locale, Settings};
//!
//! let settings = Settings::builder()
//!     .timezone("Europe/London")
//!     .locale("en")
//!     .build()
//!     .unwrap();
//! assert_eq!(settings.locale(), Locale::En);
//! assert_eq!(settings.timezone().name(), "Europe/London");
//! ```

use chrono_tz::Tz;

use crate::errors::{Error, Result};
use crate::locale::Locale;

/// Timezone of the reference configuration.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// Default maximum number of candidate days a holiday/weekday search visits.
pub const DEFAULT_SCAN_LIMIT: u32 = 366;

/// Timezone, locale, and search limit for a family of calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    timezone: Tz,
    locale: Locale,
    scan_limit: u32,
}

impl Default for Settings {
    /// `Asia/Tokyo`, `ja`, 366 days.
    fn default() -> Self {
        Settings {
            timezone: DEFAULT_TIMEZONE,
            locale: Locale::Ja,
            scan_limit: DEFAULT_SCAN_LIMIT,
        }
    }
}

impl Settings {
    /// Start building settings from the defaults.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// The timezone all instants are normalized into.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The locale used for weekday names and localized formatting.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The maximum number of days a search inspects before giving up.
    pub fn scan_limit(&self) -> u32 {
        self.scan_limit
    }
}

/// Builder for [`Settings`].
///
/// Identifiers are validated in [`build`](SettingsBuilder::build), so the
/// setters can be chained freely.
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    timezone: Option<String>,
    locale: Option<String>,
    scan_limit: Option<u32>,
}

impl SettingsBuilder {
    /// IANA timezone identifier, e.g. `"Asia/Tokyo"`.
    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    /// Locale identifier, e.g. `"ja"` or `"en-US"`.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Maximum number of candidate days per search.  Must be positive.
    pub fn scan_limit(mut self, limit: u32) -> Self {
        self.scan_limit = Some(limit);
        self
    }

    /// Validate the identifiers and produce the settings.
    pub fn build(self) -> Result<Settings> {
        let defaults = Settings::default();
        let timezone = match self.timezone {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| Error::InvalidTimezone(name.clone()))?,
            None => defaults.timezone,
        };
        let locale = match self.locale {
            Some(id) => id.parse::<Locale>()?,
            None => defaults.locale,
        };
        let scan_limit = self.scan_limit.unwrap_or(defaults.scan_limit);
        crate::ensure!(scan_limit > 0, "scan limit must be positive");
        Ok(Settings {
            timezone,
            locale,
            scan_limit,
        })
    }
}
