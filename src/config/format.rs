//! Remaining-time display formats.
//!
//! Every format is a pure function of a `Duration`. Values are rounded to the
//! nearest unit, halves rounding up.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::error::ConfigError;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;

// ============================================================================
// DisplayFormat
// ============================================================================

/// How the remaining time is rendered in the tray title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayFormat {
    /// Hours only, e.g. `"2h"`
    H,
    /// Minutes only, e.g. `"25m"`
    M,
    /// Seconds only, e.g. `"1500s"`
    S,
    /// Hours and minutes, e.g. `"01h 05m"`
    Hm,
    /// Hours, minutes and seconds, e.g. `"01:05:14"`
    Hms,
    /// Minutes and seconds, e.g. `"25:00"`
    #[default]
    Ms,
}

impl DisplayFormat {
    /// All supported formats.
    pub const ALL: [DisplayFormat; 6] = [
        DisplayFormat::H,
        DisplayFormat::M,
        DisplayFormat::S,
        DisplayFormat::Hm,
        DisplayFormat::Hms,
        DisplayFormat::Ms,
    ];

    /// Returns the command line code for this format.
    pub fn code(&self) -> &'static str {
        match self {
            DisplayFormat::H => "h",
            DisplayFormat::M => "m",
            DisplayFormat::S => "s",
            DisplayFormat::Hm => "hm",
            DisplayFormat::Hms => "hms",
            DisplayFormat::Ms => "ms",
        }
    }

    /// Formats a duration.
    ///
    /// ```
    /// use std::time::Duration;
    /// use traytimer::config::DisplayFormat;
    ///
    /// assert_eq!(DisplayFormat::Ms.format(Duration::from_secs(65)), "01:05");
    /// assert_eq!(DisplayFormat::Hms.format(Duration::from_secs(3725)), "01:02:05");
    /// ```
    pub fn format(&self, remaining: Duration) -> String {
        match self {
            DisplayFormat::H => format!("{}h", round_to(remaining, SECS_PER_HOUR)),
            DisplayFormat::M => format!("{}m", round_to(remaining, SECS_PER_MINUTE)),
            DisplayFormat::S => format!("{}s", round_to(remaining, 1)),
            DisplayFormat::Hm => {
                let minutes = round_to(remaining, SECS_PER_MINUTE);
                format!("{:02}h {:02}m", minutes / 60, minutes % 60)
            }
            DisplayFormat::Hms => {
                let secs = round_to(remaining, 1);
                format!(
                    "{:02}:{:02}:{:02}",
                    secs / SECS_PER_HOUR,
                    (secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
                    secs % SECS_PER_MINUTE
                )
            }
            DisplayFormat::Ms => {
                let secs = round_to(remaining, 1);
                format!("{:02}:{:02}", secs / SECS_PER_MINUTE, secs % SECS_PER_MINUTE)
            }
        }
    }
}

impl FromStr for DisplayFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.code() == s)
            .ok_or_else(|| ConfigError::InvalidDisplay(s.to_string()))
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Rounds a duration to the nearest whole number of `unit_secs`.
fn round_to(duration: Duration, unit_secs: u64) -> u64 {
    let unit_nanos = u128::from(unit_secs) * 1_000_000_000;
    let rounded = (duration.as_nanos() + unit_nanos / 2) / unit_nanos;
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

// ============================================================================
// Tests
// ============================================================================
