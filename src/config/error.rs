//! Configuration error types.
//!
//! All configuration problems are detected once at startup, before the
//! engine or the controller is spawned.

use thiserror::Error;

/// Errors that can occur while building a `TimerConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Interval text does not match `(\d+h)?(\d+m)?(\d+s)?`.
    #[error("invalid timer interval: {0:?}")]
    InvalidInterval(String),

    /// Interval parsed but adds up to nothing.
    #[error("timer interval must be greater than zero: {0:?}")]
    ZeroInterval(String),

    /// Interval does not fit in a duration.
    #[error("timer interval is too large: {0:?}")]
    IntervalOverflow(String),

    /// Display code is not one of the supported formats.
    #[error("invalid display argument: {0:?} (expected one of h, m, s, hm, hms, ms)")]
    InvalidDisplay(String),

    /// Symbol table has more than three entries.
    #[error("invalid symbols argument: {0:?} (expected at most 3 symbols: restart, stop, continue)")]
    InvalidSymbols(String),
}

impl ConfigError {
    /// Returns the name of the command line flag this error relates to.
    #[must_use]
    pub fn flag(&self) -> &'static str {
        match self {
            Self::InvalidInterval(_) | Self::ZeroInterval(_) | Self::IntervalOverflow(_) => {
                "--interval"
            }
            Self::InvalidDisplay(_) => "--display",
            Self::InvalidSymbols(_) => "--state-symbols",
        }
    }
}
