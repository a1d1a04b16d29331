//! Command-line flags for the tray timer.
//!
//! Uses clap derive macro for argument parsing. Flags are kept as text here
//! and validated into a `TimerConfig` in one place.

use clap::Parser;

use crate::config::{ConfigError, TimerConfig, DEFAULT_INTERVAL, DEFAULT_SYMBOLS};

// ============================================================================
// CLI Structure
// ============================================================================

/// Tray countdown timer
#[derive(Parser, Debug)]
#[command(
    name = "traytimer",
    version,
    about = "Countdown timer that lives in the menu bar",
    long_about = "Counts an interval down in the menu bar title, notifies when it runs out \
                  and counts how many intervals have passed."
)]
pub struct Cli {
    /// Countdown length, e.g. 25m, 1h30m, 90s
    #[arg(short, long, default_value = DEFAULT_INTERVAL, value_name = "DURATION")]
    pub interval: String,

    /// Remaining-time format: h, m, s, hm, hms, ms
    #[arg(short, long, default_value = "ms", value_name = "FORMAT")]
    pub display: String,

    /// Symbols for restart, stop and continue, in that order
    #[arg(long, default_value = DEFAULT_SYMBOLS, value_name = "CHARS")]
    pub state_symbols: String,

    /// Hide the state symbols
    #[arg(long, conflicts_with = "state_symbols")]
    pub no_state_symbols: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Symbols to use, or `None` when they are turned off.
    pub fn symbols(&self) -> Option<&str> {
        if self.no_state_symbols {
            None
        } else {
            Some(&self.state_symbols)
        }
    }
}

impl TryFrom<&Cli> for TimerConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        TimerConfig::parse(&cli.interval, &cli.display, cli.symbols())
    }
}

// ============================================================================
// Tests
// ============================================================================
