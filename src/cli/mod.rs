//! CLI module for the tray timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Flag definitions using clap derive
//! - `display`: Error output before the tray is up

pub mod commands;
pub mod display;

pub use commands::Cli;
pub use display::{Display, USAGE_EXIT_CODE};
