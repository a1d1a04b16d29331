//! Menu controller.
//!
//! Mirrors engine events into the menu (Stop/Continue availability and the
//! completed-intervals counter) and turns menu clicks into engine commands.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::menubar::{MenuAction, MenuItemId, MenuSink, MenuState};
use crate::types::{TimerCommand, TimerEvent};

/// Owns the menu state and reacts to engine events and user actions.
pub struct MenuController<M> {
    state: MenuState,
    sink: M,
    command_tx: mpsc::Sender<TimerCommand>,
    shutdown: CancellationToken,
}

impl<M: MenuSink> MenuController<M> {
    /// Creates a new MenuController.
    ///
    /// `shutdown` is cancelled when the controller quits.
    pub fn new(
        sink: M,
        command_tx: mpsc::Sender<TimerCommand>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            state: MenuState::new(),
            sink,
            command_tx,
            shutdown,
        }
    }

    /// Runs until Quit is clicked or either input channel closes.
    ///
    /// The stats label is refreshed before every wait, so a reset or a
    /// timeout is visible on the next menu open.
    pub async fn run(
        mut self,
        mut event_rx: mpsc::UnboundedReceiver<TimerEvent>,
        mut action_rx: mpsc::UnboundedReceiver<MenuAction>,
    ) {
        loop {
            self.sink.set_stats_label(&self.state.stats_label());

            // Events first, so a click always sees the latest engine state.
            let keep_running = tokio::select! {
                biased;
                event = event_rx.recv() => match event {
                    Some(event) => {
                        self.handle_event(event);
                        true
                    }
                    None => {
                        tracing::debug!("timer event channel closed");
                        false
                    }
                },
                action = action_rx.recv() => match action {
                    Some(action) => self.handle_action(action).await,
                    None => {
                        tracing::debug!("menu action channel closed");
                        false
                    }
                },
            };

            if !keep_running {
                break;
            }
        }

        self.quit();
    }

    /// Applies an engine event to the menu.
    pub fn handle_event(&mut self, event: TimerEvent) {
        self.state.apply_event(event);
        self.sink
            .set_enabled(MenuItemId::Stop, self.state.is_enabled(MenuItemId::Stop));
        self.sink.set_enabled(
            MenuItemId::Continue,
            self.state.is_enabled(MenuItemId::Continue),
        );
    }

    /// Handles a click. Returns `false` when the controller should stop.
    pub async fn handle_action(&mut self, action: MenuAction) -> bool {
        tracing::debug!(action = %action, "menu action");

        if let Some(command) = action.as_command() {
            if let Err(e) = self.command_tx.send(command).await {
                tracing::error!(error = %e, "timer engine is gone");
                return false;
            }
            return true;
        }

        match action {
            MenuAction::ResetStats => {
                self.state.reset_stats();
                true
            }
            MenuAction::Quit => false,
            // Commands were handled above.
            MenuAction::Restart | MenuAction::Stop | MenuAction::Continue => true,
        }
    }

    /// Returns the current menu state.
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    fn quit(&self) {
        tracing::info!(
            intervals_completed = self.state.intervals_completed(),
            "shutting down"
        );
        self.sink.shutdown();
        self.shutdown.cancel();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menubar::{TrayHandle, TrayUpdate};
    use crossbeam_channel::{unbounded, Receiver};
    use std::time::Duration;

    struct Harness {
        controller: MenuController<TrayHandle>,
        command_rx: mpsc::Receiver<TimerCommand>,
        update_rx: Receiver<TrayUpdate>,
        shutdown: CancellationToken,
    }

    fn create_controller() -> Harness {
        let (command_tx, command_rx) = mpsc::channel(4);
        let (update_tx, update_rx) = unbounded();
        let shutdown = CancellationToken::new();

        Harness {
            controller: MenuController::new(
                TrayHandle::new(update_tx),
                command_tx,
                shutdown.clone(),
            ),
            command_rx,
            update_rx,
            shutdown,
        }
    }

    mod event_tests {
        use super::*;

        #[test]
        fn test_started_enables_stop_only() {
            let mut h = create_controller();
            h.controller.handle_event(TimerEvent::Started);

            let updates: Vec<_> = h.update_rx.try_iter().collect();
            assert_eq!(
                updates,
                vec![
                    TrayUpdate::SetEnabled {
                        item: MenuItemId::Stop,
                        enabled: true
                    },
                    TrayUpdate::SetEnabled {
                        item: MenuItemId::Continue,
                        enabled: false
                    },
                ]
            );
        }

        #[test]
        fn test_paused_enables_continue_only() {
            let mut h = create_controller();
            h.controller.handle_event(TimerEvent::Started);
            h.controller.handle_event(TimerEvent::Paused);

            assert!(!h.controller.state().is_enabled(MenuItemId::Stop));
            assert!(h.controller.state().is_enabled(MenuItemId::Continue));
        }

        #[test]
        fn test_timed_out_counts_and_disables_both() {
            let mut h = create_controller();
            h.controller.handle_event(TimerEvent::Started);
            h.controller.handle_event(TimerEvent::TimedOut);
            h.controller.handle_event(TimerEvent::Started);
            h.controller.handle_event(TimerEvent::TimedOut);

            let state = h.controller.state();
            assert_eq!(state.intervals_completed(), 2);
            assert!(!state.is_enabled(MenuItemId::Stop));
            assert!(!state.is_enabled(MenuItemId::Continue));
        }
    }

    mod action_tests {
        use super::*;

        #[tokio::test]
        async fn test_commands_are_forwarded() {
            let mut h = create_controller();

            assert!(h.controller.handle_action(MenuAction::Stop).await);
            assert!(h.controller.handle_action(MenuAction::Continue).await);
            assert!(h.controller.handle_action(MenuAction::Restart).await);

            assert_eq!(h.command_rx.recv().await, Some(TimerCommand::Stop));
            assert_eq!(h.command_rx.recv().await, Some(TimerCommand::Continue));
            assert_eq!(h.command_rx.recv().await, Some(TimerCommand::Restart));
        }

        #[tokio::test]
        async fn test_reset_stats_sends_nothing() {
            let mut h = create_controller();
            h.controller.handle_event(TimerEvent::TimedOut);

            assert!(h.controller.handle_action(MenuAction::ResetStats).await);
            assert_eq!(h.controller.state().intervals_completed(), 0);
            assert!(h.command_rx.try_recv().is_err());
        }

        #[tokio::test]
        async fn test_quit_returns_false() {
            let mut h = create_controller();
            assert!(!h.controller.handle_action(MenuAction::Quit).await);
        }

        #[tokio::test]
        async fn test_closed_engine_stops_controller() {
            let mut h = create_controller();
            drop(h.command_rx);
            assert!(!h.controller.handle_action(MenuAction::Restart).await);
        }
    }

    mod run_tests {
        use super::*;

        #[tokio::test]
        async fn test_run_until_quit() {
            let h = create_controller();
            let (event_tx, event_rx) = mpsc::unbounded_channel();
            let (action_tx, action_rx) = mpsc::unbounded_channel();
            let mut command_rx = h.command_rx;
            let shutdown = h.shutdown;

            let handle = tokio::spawn(h.controller.run(event_rx, action_rx));

            event_tx.send(TimerEvent::Started).unwrap();
            event_tx.send(TimerEvent::TimedOut).unwrap();
            action_tx.send(MenuAction::Restart).unwrap();
            assert_eq!(command_rx.recv().await, Some(TimerCommand::Restart));

            action_tx.send(MenuAction::Quit).unwrap();
            tokio::time::timeout(Duration::from_secs(1), handle)
                .await
                .unwrap()
                .unwrap();
            tokio::time::timeout(Duration::from_secs(1), shutdown.cancelled())
                .await
                .unwrap();

            let updates: Vec<_> = h.update_rx.try_iter().collect();
            assert!(updates.contains(&TrayUpdate::SetStatsLabel(
                "1 intervals passed".to_string()
            )));
            assert_eq!(updates.last(), Some(&TrayUpdate::Shutdown));
        }

        #[tokio::test]
        async fn test_closed_actions_behave_like_quit() {
            let h = create_controller();
            let (_event_tx, event_rx) = mpsc::unbounded_channel();
            let (action_tx, action_rx) = mpsc::unbounded_channel::<MenuAction>();
            drop(action_tx);

            tokio::time::timeout(Duration::from_secs(1), h.controller.run(event_rx, action_rx))
                .await
                .unwrap();
            assert!(h.shutdown.is_cancelled());
        }
    }
}
