//! Terminal front-end for platforms without a native menu bar.
//!
//! The title is drawn as a status line on stdout and menu items are
//! "clicked" by typing their name on stdin.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;

use anyhow::Context;
use tokio::sync::mpsc::UnboundedSender;

use super::{EventHandler, MenuAction, MenuConfig, MenuItemId, TrayIconManager, TraySnapshot};

const USAGE: &str = "commands: restart (r), stop (s), continue (c), reset, quit (q)";

// ============================================================================
// StatusLine
// ============================================================================

/// Renders the tray contents as a single terminal line.
#[derive(Debug)]
pub(super) struct StatusLine {
    /// Rewrite the line in place instead of printing one line per change
    interactive: bool,
    last: Option<String>,
    /// Set after the first failed write; nothing is drawn afterwards
    broken: bool,
}

impl StatusLine {
    pub(super) fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
            last: None,
            broken: false,
        }
    }

    pub(super) fn render(&mut self, snapshot: &TraySnapshot) {
        self.render_to(&mut io::stdout().lock(), snapshot);
    }

    fn render_to<W: Write>(&mut self, out: &mut W, snapshot: &TraySnapshot) {
        if self.broken {
            return;
        }

        let line = format!("{}  [{}]", snapshot.title, snapshot.stats_label);
        if self.last.as_deref() == Some(line.as_str()) {
            return;
        }

        let written = if self.interactive {
            write!(out, "\r\x1b[2K{line}")
        } else {
            writeln!(out, "{line}")
        };
        let written = written.and_then(|()| out.flush());

        if let Err(e) = written {
            tracing::debug!(error = %e, "status line output failed, no longer rendering");
            self.broken = true;
            return;
        }

        self.last = Some(line);
    }

    pub(super) fn finish(self) {
        if self.interactive && self.last.is_some() && !self.broken {
            println!();
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Runs the terminal front-end until the tray shuts down.
pub(super) fn run(
    mut manager: TrayIconManager,
    config: MenuConfig,
    action_tx: UnboundedSender<MenuAction>,
) -> anyhow::Result<()> {
    manager.initialize(&config)?;
    eprintln!("{USAGE}");

    let snapshot = manager.snapshot_handle();
    thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || read_actions(io::stdin().lock(), &snapshot, &action_tx))
        .context("failed to start console input thread")?;

    manager.run_until_shutdown();
    Ok(())
}

/// Forwards typed commands for enabled items to `action_tx`.
fn read_actions<R: BufRead>(
    input: R,
    snapshot: &Arc<RwLock<TraySnapshot>>,
    action_tx: &UnboundedSender<MenuAction>,
) {
    let handler = EventHandler::new();

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read console input");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let item = MenuItemId::from_input(&line);
        if item == MenuItemId::Unknown {
            tracing::warn!(input = %line.trim(), "unknown command; {}", USAGE);
            continue;
        }

        let enabled = snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_enabled(item);
        if !enabled {
            tracing::info!(item = ?item, "menu item is disabled");
            continue;
        }

        if let Some(action) = handler.handle_click(item) {
            if action_tx.send(action).is_err() {
                break;
            }
        }
    }

    tracing::debug!("console input closed");
}
