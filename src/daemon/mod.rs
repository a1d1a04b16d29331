//! Background tasks of the tray timer.
//!
//! This module contains the tokio side of the application:
//! - `timer`: Timer engine with state transitions and countdown logic
//! - `controller`: Menu controller mirroring engine events into the menu
//!
//! Both tasks stop on one shared `CancellationToken`, cancelled by the
//! controller on Quit.

pub mod controller;
pub mod timer;

pub use controller::MenuController;
pub use timer::{TimerEngine, TimerState, TICK_INTERVAL};

use anyhow::Context;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::TimerConfig;
use crate::menubar::{MenuAction, MenuSink, TitleSink};
use crate::notification::Notifier;

/// Capacity of the controller → engine command channel.
///
/// Commands are consumed once per tick, so a burst of clicks makes the
/// controller wait instead of growing the queue.
pub const COMMAND_BUFFER: usize = 4;

/// Runs the timer engine and the menu controller until Quit.
///
/// `action_rx` carries clicks from the UI thread. When this returns, a
/// `Shutdown` update has been sent through `menu_sink`.
pub async fn run<T, M, N>(
    config: TimerConfig,
    title_sink: T,
    menu_sink: M,
    notifier: N,
    action_rx: mpsc::UnboundedReceiver<MenuAction>,
) -> anyhow::Result<()>
where
    T: TitleSink,
    M: MenuSink,
    N: Notifier,
{
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let shutdown = CancellationToken::new();

    tracing::info!(
        interval = %config.interval_text(),
        display = %config.display(),
        "starting timer"
    );

    let engine = TimerEngine::new(config, title_sink, notifier, command_rx, event_tx);
    let controller = MenuController::new(menu_sink, command_tx, shutdown.clone());

    let engine_handle = tokio::spawn(engine.run(shutdown));
    let controller_handle = tokio::spawn(controller.run(event_rx, action_rx));

    controller_handle
        .await
        .context("menu controller task failed")?;
    engine_handle.await.context("timer engine task failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayFormat, Symbols};
    use crate::menubar::{TrayHandle, TrayUpdate};
    use crate::notification::MockNotifier;
    use crossbeam_channel::unbounded;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_run_returns_after_quit() {
        let config =
            TimerConfig::new(Duration::from_secs(3), DisplayFormat::S, Symbols::default()).unwrap();
        let (update_tx, update_rx) = unbounded();
        let handle = TrayHandle::new(update_tx);
        let notifier = Arc::new(MockNotifier::new());
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run(
            config,
            handle.clone(),
            handle,
            Arc::clone(&notifier),
            action_rx,
        ));

        tokio::time::sleep(Duration::from_millis(3500)).await;
        action_tx.send(MenuAction::Quit).unwrap();
        task.await.unwrap().unwrap();

        let updates: Vec<_> = update_rx.try_iter().collect();
        assert!(updates.contains(&TrayUpdate::SetTitle("▷ 3s".to_string())));
        assert!(updates.contains(&TrayUpdate::SetTitle("□ 3s".to_string())));
        assert_eq!(updates.last(), Some(&TrayUpdate::Shutdown));
        assert_eq!(notifier.notification_count(), 1);
    }
}
