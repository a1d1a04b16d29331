//! Event handling for menu bar interactions.
//!
//! This module handles:
//! - Menu item identification and the action each item triggers
//! - Updates sent from the async tasks to the UI thread
//!
//! The event types and action mapping are platform-independent.

use std::fmt;

use crate::types::TimerCommand;

// ============================================================================
// MenuAction
// ============================================================================

/// Actions that can be triggered from the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Restart the countdown from the full interval
    Restart,
    /// Stop (freeze) the countdown
    Stop,
    /// Continue a stopped countdown
    Continue,
    /// Reset the completed-intervals counter
    ResetStats,
    /// Quit the whole application
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MenuAction::Restart => "restart",
            MenuAction::Stop => "stop",
            MenuAction::Continue => "continue",
            MenuAction::ResetStats => "reset_stats",
            MenuAction::Quit => "quit",
        };
        f.write_str(name)
    }
}

impl MenuAction {
    /// Returns the timer command for this action, if it is forwarded to the
    /// engine.
    pub fn as_command(&self) -> Option<TimerCommand> {
        match self {
            MenuAction::Restart => Some(TimerCommand::Restart),
            MenuAction::Stop => Some(TimerCommand::Stop),
            MenuAction::Continue => Some(TimerCommand::Continue),
            MenuAction::ResetStats | MenuAction::Quit => None,
        }
    }
}

// ============================================================================
// MenuItemId
// ============================================================================

/// Identifiers for menu items.
///
/// On macOS, native menu ids are mapped onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemId {
    /// "Restart" item
    Restart,
    /// "Stop" item
    Stop,
    /// "Continue" item
    Continue,
    /// Stats label; clicking it resets the counter
    Stats,
    /// "Quit" item
    Quit,
    /// Unknown or unhandled menu item
    Unknown,
}

impl MenuItemId {
    /// Converts a menu item ID to the corresponding action.
    pub fn to_action(&self) -> Option<MenuAction> {
        match self {
            MenuItemId::Restart => Some(MenuAction::Restart),
            MenuItemId::Stop => Some(MenuAction::Stop),
            MenuItemId::Continue => Some(MenuAction::Continue),
            MenuItemId::Stats => Some(MenuAction::ResetStats),
            MenuItemId::Quit => Some(MenuAction::Quit),
            MenuItemId::Unknown => None,
        }
    }

    /// Maps a typed console command onto a menu item.
    pub fn from_input(input: &str) -> MenuItemId {
        match input.trim().to_ascii_lowercase().as_str() {
            "r" | "restart" => MenuItemId::Restart,
            "s" | "stop" => MenuItemId::Stop,
            "c" | "continue" => MenuItemId::Continue,
            "reset" | "stats" => MenuItemId::Stats,
            "q" | "quit" | "exit" => MenuItemId::Quit,
            _ => MenuItemId::Unknown,
        }
    }
}

// ============================================================================
// EventHandler
// ============================================================================

/// Converts menu clicks to actions.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Creates a new EventHandler.
    pub fn new() -> Self {
        Self
    }

    /// Processes a menu item click and returns the corresponding action.
    pub fn handle_click(&self, item_id: MenuItemId) -> Option<MenuAction> {
        let action = item_id.to_action();

        match action {
            Some(ref action) => tracing::info!(action = %action, "menu action received"),
            None => tracing::debug!(item = ?item_id, "click on item without action"),
        }

        action
    }
}

// ============================================================================
// TrayUpdate
// ============================================================================

/// Updates sent to the tray front-end.
///
/// Sent over a crossbeam channel from the tokio tasks to the thread that
/// owns the UI, and applied in the order they were sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayUpdate {
    /// Replace the title text displayed in the menu bar
    SetTitle(String),
    /// Enable or disable a menu item
    SetEnabled {
        /// Target item
        item: MenuItemId,
        /// New state
        enabled: bool,
    },
    /// Replace the stats item label
    SetStatsLabel(String),
    /// Tear the tray down
    Shutdown,
}

// ============================================================================
// Tests
// ============================================================================
