//! Terminal output for the tray timer.
//!
//! The timer itself talks through the tray; this only covers the few lines
//! printed before the tray is up.

use clap::CommandFactory;

use super::Cli;
use crate::config::ConfigError;

/// Exit status for invalid command line usage.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("{}", Self::error_line(message));
    }

    /// Shows a configuration error followed by the help hint.
    pub fn show_config_error(error: &ConfigError) {
        Self::show_error(&error.to_string());
        eprintln!("{}", Self::help_hint());
    }

    fn error_line(message: &str) -> String {
        format!("error: {message}")
    }

    fn help_hint() -> String {
        let command = Cli::command();
        format!("Try '{} --help' for more information.", command.get_name())
    }
}
