//! Error types for koyomi.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  The [`ensure!`](crate::ensure) macro
//! covers precondition checks.

use thiserror::Error;

/// The top-level error type used throughout koyomi.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed as a date.
    #[error("unparseable date {input:?}{}", format_suffix(.format))]
    Parse {
        /// The rejected input.
        input: String,
        /// The explicit format, if one was given.
        format: Option<String>,
    },

    /// The `strftime` pattern could not be rendered.
    #[error("invalid format pattern: {0:?}")]
    InvalidFormat(String),

    /// The timezone identifier is not in the tz database.
    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),

    /// The locale identifier is not supported.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Day arithmetic left the representable date range.
    #[error("date out of range: {0}")]
    OutOfRange(String),

    /// A day-by-day search visited `limit` candidates without a match.
    #[error("no {search} found within {limit} days")]
    ScanLimitExceeded {
        /// What was searched for (e.g. `"next holiday"`).
        search: &'static str,
        /// The number of candidate days inspected.
        limit: u32,
    },

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

fn format_suffix(format: &Option<String>) -> String {
    match format {
        Some(f) => format!(" (format {f:?})"),
        None => String::new(),
    }
}

/// Shorthand `Result` type used throughout koyomi.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use koyomi_core::{ensure, errors::Error};
/// fn positive(n: u32) -> koyomi_core::errors::Result<u32> {
///     ensure!(n > 0, "n must be positive, got {n}");
///     Ok(n)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
