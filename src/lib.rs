//! Tray Timer Library
//!
//! This library provides the core functionality for the tray countdown timer.
//! It includes:
//! - Timer configuration: interval parsing, display formats and state symbols
//! - Timer engine and menu controller running as tokio tasks
//! - Menu bar front-ends (native tray on macOS, console elsewhere)
//! - Desktop notifications on timeout
//! - CLI flag parsing and error display

pub mod cli;
pub mod config;
pub mod daemon;
pub mod menubar;
pub mod notification;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{TimerCommand, TimerEvent};

pub use config::{ConfigError, DisplayFormat, SymbolKind, Symbols, TimerConfig};

pub use daemon::{MenuController, TimerEngine, TimerState};

pub use notification::{DesktopNotifier, MockNotifier, NotificationError, Notifier};

// Re-export menubar types
pub use menubar::{
    EventHandler, MenuAction, MenuBuilder, MenuConfig, MenuItemConfig, MenuItemId, MenuSink,
    MenuState, TitleSink, TrayHandle, TrayIconManager, TrayUpdate,
};
