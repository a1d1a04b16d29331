//! Native menu bar front-end (macOS).
//!
//! The tray icon lives on the main thread inside a tao event loop. Menu
//! clicks come in through `MenuEvent`; updates from the tokio tasks are
//! drained on every wake-up.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tokio::sync::mpsc::UnboundedSender;
use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{TrayIcon, TrayIconBuilder};

use super::sink::delivered;
use super::{EventHandler, MenuAction, MenuConfig, MenuItemId, TrayIconManager, TrayUpdate};

/// How often pending tray updates are drained.
const UPDATE_POLL_INTERVAL: Duration = Duration::from_millis(100);

enum UserEvent {
    Menu(MenuEvent),
}

// ============================================================================
// NativeTray
// ============================================================================

/// The tray icon and its menu items.
pub(super) struct NativeTray {
    tray_icon: TrayIcon,
    items: HashMap<MenuItemId, MenuItem>,
    ids: HashMap<MenuId, MenuItemId>,
}

impl NativeTray {
    /// Builds the menu and the tray icon.
    pub(super) fn build(config: &MenuConfig) -> Result<Self> {
        let menu = Menu::new();
        let mut items = HashMap::new();
        let mut ids = HashMap::new();

        for (id, item_config) in config.items() {
            if id == MenuItemId::Stats {
                menu.append(&PredefinedMenuItem::separator())?;
            }

            let item = MenuItem::new(&item_config.text, item_config.enabled, None);
            menu.append(&item)?;
            ids.insert(item.id().clone(), id);
            items.insert(id, item);
        }

        let tray_icon = TrayIconBuilder::new()
            .with_title(&config.title)
            .with_tooltip(&config.tooltip)
            .with_menu(Box::new(menu))
            .build()
            .context("failed to create tray icon")?;

        Ok(Self {
            tray_icon,
            items,
            ids,
        })
    }

    /// Applies an update to the native widgets.
    pub(super) fn apply(&self, update: &TrayUpdate) {
        match update {
            TrayUpdate::SetTitle(title) => self.tray_icon.set_title(Some(title)),
            TrayUpdate::SetEnabled { item, enabled } => {
                if let Some(menu_item) = self.items.get(item) {
                    menu_item.set_enabled(*enabled);
                }
            }
            TrayUpdate::SetStatsLabel(label) => {
                if let Some(menu_item) = self.items.get(&MenuItemId::Stats) {
                    menu_item.set_text(label);
                }
            }
            TrayUpdate::Shutdown => {}
        }
    }

    /// Maps a native menu id to our item id.
    pub(super) fn item_id(&self, id: &MenuId) -> MenuItemId {
        self.ids.get(id).copied().unwrap_or(MenuItemId::Unknown)
    }
}

// ============================================================================
// Event loop
// ============================================================================

/// Runs the tao event loop. Never returns; the process exits with the loop.
pub(super) fn run_event_loop(
    mut manager: TrayIconManager,
    config: MenuConfig,
    action_tx: UnboundedSender<MenuAction>,
) -> Result<()> {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        delivered(proxy.send_event(UserEvent::Menu(event)), "menu event");
    }));

    let handler = EventHandler::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(Instant::now() + UPDATE_POLL_INTERVAL);

        match event {
            Event::NewEvents(StartCause::Init) => {
                if let Err(e) = manager.initialize(&config) {
                    tracing::error!(error = %e, "failed to initialize menu bar");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            Event::UserEvent(UserEvent::Menu(event)) => {
                let item = manager.menu_item_id(&event.id);
                if let Some(action) = handler.handle_click(item) {
                    if action_tx.send(action).is_err() {
                        tracing::warn!("menu controller is gone");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
            }
            _ => {}
        }

        if manager.is_initialized() && !manager.process_pending_updates() {
            *control_flow = ControlFlow::Exit;
        }
    })
}
