//! Menu building and item state management for the menu bar.
//!
//! This module handles:
//! - The initial menu layout built from the timer configuration
//! - `MenuState`: which items are enabled and the completed-intervals counter
//!
//! The logic is platform-independent and fully testable.

use crate::config::{SymbolKind, TimerConfig};
use crate::types::TimerEvent;

use super::event::MenuItemId;
use super::icon::running_title;

// ============================================================================
// MenuItemConfig
// ============================================================================

/// Configuration for a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemConfig {
    /// Display text for the menu item
    pub text: String,
    /// Whether the menu item is enabled (clickable)
    pub enabled: bool,
}

impl MenuItemConfig {
    /// Creates a new menu item configuration.
    pub fn new(text: impl Into<String>, enabled: bool) -> Self {
        Self {
            text: text.into(),
            enabled,
        }
    }
}

// ============================================================================
// MenuConfig
// ============================================================================

/// Initial tray layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Title shown before the first tick
    pub title: String,
    /// Tooltip of the tray icon
    pub tooltip: String,
    /// Restart button
    pub restart: MenuItemConfig,
    /// Stop button
    pub stop: MenuItemConfig,
    /// Continue button
    pub continue_: MenuItemConfig,
    /// Stats label (click resets)
    pub stats: MenuItemConfig,
    /// Quit button
    pub quit: MenuItemConfig,
}

impl MenuConfig {
    /// Returns the clickable items in display order.
    pub fn items(&self) -> [(MenuItemId, &MenuItemConfig); 5] {
        [
            (MenuItemId::Restart, &self.restart),
            (MenuItemId::Stop, &self.stop),
            (MenuItemId::Continue, &self.continue_),
            (MenuItemId::Stats, &self.stats),
            (MenuItemId::Quit, &self.quit),
        ]
    }
}

// ============================================================================
// MenuBuilder
// ============================================================================

/// Builds the initial menu configuration.
#[derive(Debug, Default)]
pub struct MenuBuilder;

impl MenuBuilder {
    /// Creates a new MenuBuilder.
    pub fn new() -> Self {
        Self
    }

    /// Builds the menu for a timer configuration.
    ///
    /// Stop and Continue start disabled; the engine's first `Started` event
    /// enables Stop.
    pub fn build(&self, config: &TimerConfig) -> MenuConfig {
        let symbols = config.symbols();
        let state = MenuState::new();

        MenuConfig {
            title: running_title(config, config.interval()),
            tooltip: config.tooltip(),
            restart: MenuItemConfig::new(symbols.decorate(SymbolKind::Restart, "Restart"), true),
            stop: MenuItemConfig::new(
                symbols.decorate(SymbolKind::Stop, "Stop"),
                state.is_enabled(MenuItemId::Stop),
            ),
            continue_: MenuItemConfig::new(
                symbols.decorate(SymbolKind::Continue, "Continue"),
                state.is_enabled(MenuItemId::Continue),
            ),
            stats: MenuItemConfig::new(state.stats_label(), true),
            quit: MenuItemConfig::new("Quit", true),
        }
    }
}

// ============================================================================
// MenuState
// ============================================================================

/// Mutable menu state owned by the menu controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Completed countdowns since start or last reset
    intervals_completed: u32,
    stop_enabled: bool,
    continue_enabled: bool,
}

impl MenuState {
    /// Creates a state with nothing completed and Stop/Continue disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors an engine event into the item states.
    pub fn apply_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Started => {
                self.stop_enabled = true;
                self.continue_enabled = false;
            }
            TimerEvent::Paused => {
                self.stop_enabled = false;
                self.continue_enabled = true;
            }
            TimerEvent::TimedOut => {
                self.stop_enabled = false;
                self.continue_enabled = false;
                self.intervals_completed = self.intervals_completed.saturating_add(1);
            }
        }
    }

    /// Resets the completed-intervals counter.
    pub fn reset_stats(&mut self) {
        self.intervals_completed = 0;
    }

    /// Returns the completed-intervals counter.
    pub fn intervals_completed(&self) -> u32 {
        self.intervals_completed
    }

    /// Returns whether an item is clickable.
    pub fn is_enabled(&self, item: MenuItemId) -> bool {
        match item {
            MenuItemId::Stop => self.stop_enabled,
            MenuItemId::Continue => self.continue_enabled,
            MenuItemId::Restart | MenuItemId::Stats | MenuItemId::Quit => true,
            MenuItemId::Unknown => false,
        }
    }

    /// Label of the stats item.
    pub fn stats_label(&self) -> String {
        format!("{} intervals passed", self.intervals_completed)
    }
}

// ============================================================================
// Tests
// ============================================================================
