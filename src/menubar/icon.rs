//! Title text for the menu bar.
//!
//! A title is a state symbol followed by a formatted duration, e.g. `"▷ 24:59"`.

use std::time::Duration;

use crate::config::{SymbolKind, TimerConfig};

/// Title while counting down: continue symbol and the live remaining time.
pub fn running_title(config: &TimerConfig, remaining: Duration) -> String {
    config
        .symbols()
        .decorate(SymbolKind::Continue, &config.format(remaining))
}

/// Title while not counting down: stop symbol and `shown`.
///
/// `shown` is the frozen remaining time after a manual stop, or the full
/// interval after a timeout.
pub fn stopped_title(config: &TimerConfig, shown: Duration) -> String {
    config
        .symbols()
        .decorate(SymbolKind::Stop, &config.format(shown))
}
