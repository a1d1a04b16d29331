//! Output sinks for the timer engine and the menu controller.
//!
//! The engine only ever writes the title; the controller only ever touches
//! menu items. Both go through a `TrayHandle`, which forwards to the UI
//! thread so that UI calls are never made from two threads.

use std::fmt;

use crossbeam_channel::Sender;

use super::event::{MenuItemId, TrayUpdate};

/// Receives tray title text.
pub trait TitleSink: Send + 'static {
    /// Replaces the displayed title. Last write wins.
    fn set_title(&self, text: &str);
}

/// Receives menu item changes.
pub trait MenuSink: Send + 'static {
    /// Enables or disables a menu item.
    fn set_enabled(&self, item: MenuItemId, enabled: bool);

    /// Replaces the stats item label.
    fn set_stats_label(&self, label: &str);

    /// Tears the tray down before the process exits.
    fn shutdown(&self);
}

// ============================================================================
// TrayHandle
// ============================================================================

/// Cloneable handle that forwards updates to the `TrayIconManager`.
#[derive(Debug, Clone)]
pub struct TrayHandle {
    update_tx: Sender<TrayUpdate>,
}

impl TrayHandle {
    /// Creates a handle sending on `update_tx`.
    pub fn new(update_tx: Sender<TrayUpdate>) -> Self {
        Self { update_tx }
    }

    fn send(&self, update: TrayUpdate) {
        delivered(self.update_tx.send(update), "tray update");
    }
}

/// Logs a send to a closed receiver at debug level.
///
/// Returns whether the message was delivered.
pub(super) fn delivered<E: fmt::Display>(result: Result<(), E>, what: &'static str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "{what} dropped, receiver is gone");
            false
        }
    }
}

impl TitleSink for TrayHandle {
    fn set_title(&self, text: &str) {
        self.send(TrayUpdate::SetTitle(text.to_string()));
    }
}

impl MenuSink for TrayHandle {
    fn set_enabled(&self, item: MenuItemId, enabled: bool) {
        self.send(TrayUpdate::SetEnabled { item, enabled });
    }

    fn set_stats_label(&self, label: &str) {
        self.send(TrayUpdate::SetStatsLabel(label.to_string()));
    }

    fn shutdown(&self) {
        self.send(TrayUpdate::Shutdown);
    }
}
