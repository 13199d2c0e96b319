//! `Locale` — the language used for weekday names and localized formatting.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::errors::Error;

/// Two-letter weekday names, Sunday first.
const JA_WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];
const EN_WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A supported rendering locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// Japanese (`ja`).
    #[default]
    Ja,
    /// English (`en`).
    En,
}

impl Locale {
    /// The short identifier (`"ja"` or `"en"`).
    pub fn identifier(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }

    /// The date library's locale used for localized `strftime` rendering.
    pub fn chrono_locale(&self) -> chrono::Locale {
        match self {
            Locale::Ja => chrono::Locale::ja_JP,
            Locale::En => chrono::Locale::en_US,
        }
    }

    /// The minimal weekday name (`月`, `Mo`, ...).
    pub fn weekday_short(&self, weekday: Weekday) -> &'static str {
        let names = match self {
            Locale::Ja => &JA_WEEKDAYS,
            Locale::En => &EN_WEEKDAYS,
        };
        names[weekday.num_days_from_sunday() as usize]
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts `ja`, `ja-JP`, `ja_JP`, `en`, `en-US`, `en_US` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let region = s.trim().split(['-', '_']).nth(1).map(str::to_ascii_lowercase);
        match (lang.as_str(), region.as_deref()) {
            ("ja", None | Some("jp")) => Ok(Locale::Ja),
            ("en", None | Some("us")) => Ok(Locale::En),
            _ => Err(Error::UnsupportedLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
