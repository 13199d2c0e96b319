//! # koyomi-core
//!
//! Error types, locale, and settings shared by the koyomi crates.
//!
//! The calendar types in `koyomi-time` and the holiday tables in
//! `koyomi-holidays` both report failures through [`Error`] and take their
//! timezone and locale from [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Rendering locale.
pub mod locale;

/// Timezone / locale / search-limit settings.
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use chrono_tz::Tz;
pub use errors::{Error, Result};
pub use locale::Locale;
pub use settings::{Settings, SettingsBuilder, DEFAULT_SCAN_LIMIT, DEFAULT_TIMEZONE};
