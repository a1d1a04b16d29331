//! Timer configuration.
//!
//! This module provides:
//! - `interval`: interval text parsing (`"1h5m14s"`)
//! - `format`: remaining-time display formats
//! - `symbols`: state symbols for the title and the menu
//! - `error`: configuration errors
//!
//! A `TimerConfig` is built and validated once at startup; it is immutable
//! afterwards.

pub mod error;
pub mod format;
pub mod interval;
pub mod symbols;

use std::time::Duration;

pub use error::ConfigError;
pub use format::DisplayFormat;
pub use interval::parse_interval;
pub use symbols::{SymbolKind, Symbols, DEFAULT_SYMBOLS};

/// Default interval text.
pub const DEFAULT_INTERVAL: &str = "25m";

// ============================================================================
// TimerConfig
// ============================================================================

/// Validated timer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    /// Countdown length, always greater than zero
    interval: Duration,
    /// Interval as the user typed it (used for the tooltip)
    interval_text: String,
    /// Remaining-time format
    display: DisplayFormat,
    /// Title and menu symbols
    symbols: Symbols,
}

impl TimerConfig {
    /// Builds a configuration from its textual form.
    ///
    /// `symbols` of `None` means no symbols at all.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found, checking the interval, then the
    /// display code, then the symbols.
    pub fn parse(
        interval: &str,
        display: &str,
        symbols: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let duration = parse_interval(interval)?;
        let display = display.parse()?;
        let symbols = match symbols {
            Some(text) => Symbols::parse(text)?,
            None => Symbols::empty(),
        };

        Ok(Self {
            interval: duration,
            interval_text: interval.to_string(),
            display,
            symbols,
        })
    }

    /// Builds a configuration from an already parsed interval.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroInterval` for a zero interval.
    pub fn new(
        interval: Duration,
        display: DisplayFormat,
        symbols: Symbols,
    ) -> Result<Self, ConfigError> {
        let interval_text = format!("{interval:?}");
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval(interval_text));
        }

        Ok(Self {
            interval,
            interval_text,
            display,
            symbols,
        })
    }

    /// Returns the countdown length.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the interval text.
    pub fn interval_text(&self) -> &str {
        &self.interval_text
    }

    /// Returns the display format.
    pub fn display(&self) -> DisplayFormat {
        self.display
    }

    /// Returns the symbol table.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Formats a remaining duration with the configured display format.
    pub fn format(&self, remaining: Duration) -> String {
        self.display.format(remaining)
    }

    /// Tooltip shown on the tray icon.
    pub fn tooltip(&self) -> String {
        format!("Timer set {}", self.interval_text)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(25 * 60),
            interval_text: DEFAULT_INTERVAL.to_string(),
            display: DisplayFormat::default(),
            symbols: Symbols::default(),
        }
    }
}
