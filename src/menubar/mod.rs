//! Menu bar UI module for the tray timer.
//!
//! This module provides:
//! - Title text generation (e.g., "▷ 24:59")
//! - Menu layout and item state (Restart / Stop / Continue / stats / Quit)
//! - Sinks the engine and the controller write into
//! - `TrayIconManager`, which applies updates on the UI thread
//!
//! # Architecture
//!
//! - `icon.rs`: Title text generation (platform-independent)
//! - `menu.rs`: Menu configuration and `MenuState` (platform-independent)
//! - `event.rs`: Actions, item ids and `TrayUpdate` (platform-independent)
//! - `sink.rs`: `TitleSink` / `MenuSink` and the channel-backed `TrayHandle`
//! - `native.rs`: tray-icon + tao front-end (macOS only)
//! - `console.rs`: terminal front-end (other platforms)
//!
//! Updates are sent via a crossbeam channel from the tokio tasks to the
//! thread owning the UI, which drains them in order.
//!
//! ```ignore
//! use traytimer::menubar::{TrayHandle, TrayIconManager, TitleSink};
//! use crossbeam_channel::unbounded;
//!
//! let (tx, rx) = unbounded();
//! let mut manager = TrayIconManager::new(rx);
//!
//! // From the timer engine (tokio task)
//! TrayHandle::new(tx).set_title("▷ 15:30");
//!
//! // On the UI thread
//! manager.process_pending_updates();
//! ```

pub mod event;
pub mod icon;
pub mod menu;
pub mod sink;

#[cfg(not(target_os = "macos"))]
mod console;
#[cfg(target_os = "macos")]
mod native;

pub use event::{EventHandler, MenuAction, MenuItemId, TrayUpdate};
pub use icon::{running_title, stopped_title};
pub use menu::{MenuBuilder, MenuConfig, MenuItemConfig, MenuState};
pub use sink::{MenuSink, TitleSink, TrayHandle};

use std::sync::{Arc, PoisonError, RwLock};

use crossbeam_channel::{Receiver, TryRecvError};
use tokio::sync::mpsc::UnboundedSender;

// ============================================================================
// TraySnapshot
// ============================================================================

/// What the tray currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraySnapshot {
    /// Title text
    pub title: String,
    /// Whether the Stop item is enabled
    pub stop_enabled: bool,
    /// Whether the Continue item is enabled
    pub continue_enabled: bool,
    /// Stats item label
    pub stats_label: String,
}

impl TraySnapshot {
    /// Seeds a snapshot from the initial menu layout.
    pub fn from_config(config: &MenuConfig) -> Self {
        Self {
            title: config.title.clone(),
            stop_enabled: config.stop.enabled,
            continue_enabled: config.continue_.enabled,
            stats_label: config.stats.text.clone(),
        }
    }

    /// Returns whether an item can currently be clicked.
    pub fn is_enabled(&self, item: MenuItemId) -> bool {
        match item {
            MenuItemId::Stop => self.stop_enabled,
            MenuItemId::Continue => self.continue_enabled,
            MenuItemId::Restart | MenuItemId::Stats | MenuItemId::Quit => true,
            MenuItemId::Unknown => false,
        }
    }

    fn apply(&mut self, update: &TrayUpdate) {
        match update {
            TrayUpdate::SetTitle(title) => self.title.clone_from(title),
            TrayUpdate::SetEnabled { item, enabled } => match item {
                MenuItemId::Stop => self.stop_enabled = *enabled,
                MenuItemId::Continue => self.continue_enabled = *enabled,
                _ => {}
            },
            TrayUpdate::SetStatsLabel(label) => self.stats_label.clone_from(label),
            TrayUpdate::Shutdown => {}
        }
    }
}

// ============================================================================
// TrayIconManager
// ============================================================================

/// Owns the tray UI and applies `TrayUpdate`s to it.
///
/// On macOS, it also manages the actual tray-icon instance.
/// On other platforms, it renders a status line on the terminal.
pub struct TrayIconManager {
    /// Current tray contents (shared with input readers)
    snapshot: Arc<RwLock<TraySnapshot>>,
    /// Channel for receiving updates from the engine and the controller
    update_rx: Receiver<TrayUpdate>,
    /// Whether the manager is initialized
    initialized: bool,
    /// Platform-specific tray icon instance (macOS only)
    #[cfg(target_os = "macos")]
    native: Option<native::NativeTray>,
    /// Terminal renderer (other platforms)
    #[cfg(not(target_os = "macos"))]
    console: Option<console::StatusLine>,
}

impl TrayIconManager {
    /// Creates a new TrayIconManager.
    ///
    /// Nothing is shown until `initialize()` is called. On macOS this must
    /// happen once the event loop is running.
    pub fn new(update_rx: Receiver<TrayUpdate>) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(TraySnapshot::default())),
            update_rx,
            initialized: false,
            #[cfg(target_os = "macos")]
            native: None,
            #[cfg(not(target_os = "macos"))]
            console: None,
        }
    }

    /// Returns whether the manager is initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns a copy of the current tray contents.
    pub fn snapshot(&self) -> TraySnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the shared tray contents.
    pub fn snapshot_handle(&self) -> Arc<RwLock<TraySnapshot>> {
        Arc::clone(&self.snapshot)
    }

    /// Drains every pending update.
    ///
    /// Returns `false` once the tray has been shut down or every sender is
    /// gone, `true` otherwise.
    pub fn process_pending_updates(&mut self) -> bool {
        loop {
            match self.update_rx.try_recv() {
                Ok(update) => {
                    if !self.handle_update(update) {
                        return false;
                    }
                }
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("tray update channel disconnected");
                    self.shutdown();
                    return false;
                }
            }
        }
    }

    /// Blocks, applying updates until the tray is shut down.
    pub fn run_until_shutdown(&mut self) {
        while let Ok(update) = self.update_rx.recv() {
            if !self.handle_update(update) {
                return;
            }
        }
        tracing::warn!("tray update channel disconnected");
        self.shutdown();
    }

    /// Applies one update. Returns `false` after a shutdown.
    fn handle_update(&mut self, update: TrayUpdate) -> bool {
        if update == TrayUpdate::Shutdown {
            tracing::info!("shutting down tray");
            self.shutdown();
            return false;
        }

        tracing::trace!(update = ?update, "tray update");
        self.snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(&update);

        #[cfg(target_os = "macos")]
        if let Some(ref native) = self.native {
            native.apply(&update);
        }

        #[cfg(not(target_os = "macos"))]
        {
            let snapshot = self.snapshot();
            if let Some(ref mut console) = self.console {
                console.render(&snapshot);
            }
        }

        true
    }

    /// Shuts down the tray icon.
    pub fn shutdown(&mut self) {
        #[cfg(target_os = "macos")]
        {
            self.native = None;
        }
        #[cfg(not(target_os = "macos"))]
        {
            if let Some(console) = self.console.take() {
                console.finish();
            }
        }
        self.initialized = false;
    }

    /// Creates the native tray icon (macOS only).
    ///
    /// This must be called from the main thread after the event loop is running.
    ///
    /// # Errors
    ///
    /// Returns an error if the tray icon cannot be created.
    #[cfg(target_os = "macos")]
    pub fn initialize(&mut self, config: &MenuConfig) -> anyhow::Result<()> {
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) =
            TraySnapshot::from_config(config);
        self.native = Some(native::NativeTray::build(config)?);
        self.initialized = true;

        tracing::info!("menu bar icon initialized");
        Ok(())
    }

    /// Starts the terminal status line (non-macOS).
    #[cfg(not(target_os = "macos"))]
    pub fn initialize(&mut self, config: &MenuConfig) -> anyhow::Result<()> {
        let snapshot = TraySnapshot::from_config(config);
        let mut console = console::StatusLine::new();
        console.render(&snapshot);

        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
        self.console = Some(console);
        self.initialized = true;

        tracing::info!("no native menu bar on this platform, using the terminal");
        Ok(())
    }

    /// Maps a native menu id back to our item id (macOS only).
    #[cfg(target_os = "macos")]
    pub fn menu_item_id(&self, id: &tray_icon::menu::MenuId) -> MenuItemId {
        self.native
            .as_ref()
            .map_or(MenuItemId::Unknown, |native| native.item_id(id))
    }
}

impl std::fmt::Debug for TrayIconManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrayIconManager")
            .field("initialized", &self.initialized)
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Front-end
// ============================================================================

/// Runs the native menu bar on the main thread (macOS only).
///
/// Menu clicks are forwarded to `action_tx`. The event loop exits the
/// process once the tray shuts down.
///
/// # Errors
///
/// Returns an error if the front-end cannot be started.
#[cfg(target_os = "macos")]
pub fn run_front_end(
    manager: TrayIconManager,
    config: MenuConfig,
    action_tx: UnboundedSender<MenuAction>,
) -> anyhow::Result<()> {
    native::run_event_loop(manager, config, action_tx)
}

/// Runs the terminal front-end on the current thread until the tray shuts
/// down (non-macOS).
///
/// Commands typed on stdin are forwarded to `action_tx`.
///
/// # Errors
///
/// Returns an error if the front-end cannot be started.
#[cfg(not(target_os = "macos"))]
pub fn run_front_end(
    manager: TrayIconManager,
    config: MenuConfig,
    action_tx: UnboundedSender<MenuAction>,
) -> anyhow::Result<()> {
    console::run(manager, config, action_tx)
}

// ============================================================================
// Tests
// ============================================================================
