//! End-to-end tests for the timer engine and the menu controller.
//!
//! Both tasks run for real on a paused tokio clock; the tray is a headless
//! `TrayIconManager` whose snapshot is inspected between steps.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use traytimer::config::{DisplayFormat, Symbols, TimerConfig};
use traytimer::daemon;
use traytimer::menubar::{MenuAction, TrayHandle, TrayIconManager, TraySnapshot};
use traytimer::notification::MockNotifier;

// ============================================================================
// Test Helpers
// ============================================================================

struct App {
    manager: TrayIconManager,
    action_tx: mpsc::UnboundedSender<MenuAction>,
    notifier: Arc<MockNotifier>,
    task: JoinHandle<anyhow::Result<()>>,
}

impl App {
    fn start(interval_secs: u64) -> Self {
        let config = TimerConfig::new(
            Duration::from_secs(interval_secs),
            DisplayFormat::Ms,
            Symbols::default(),
        )
        .unwrap();

        let (update_tx, update_rx) = crossbeam_channel::unbounded();
        let tray = TrayHandle::new(update_tx);
        let notifier = Arc::new(MockNotifier::new());
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(daemon::run(
            config,
            tray.clone(),
            tray,
            Arc::clone(&notifier),
            action_rx,
        ));

        Self {
            manager: TrayIconManager::new(update_rx),
            action_tx,
            notifier,
            task,
        }
    }

    fn click(&self, action: MenuAction) {
        self.action_tx.send(action).unwrap();
    }

    fn tray(&mut self) -> TraySnapshot {
        assert!(self.manager.process_pending_updates());
        self.manager.snapshot()
    }

    async fn quit(mut self) {
        self.click(MenuAction::Quit);
        self.task.await.unwrap().unwrap();
        assert!(!self.manager.process_pending_updates());
    }
}

/// Advances the paused clock to `secs` after the start.
async fn advance_to(start: tokio::time::Instant, secs: f64) {
    tokio::time::sleep_until(start + Duration::from_secs_f64(secs)).await;
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_countdown_to_timeout() {
    let start = tokio::time::Instant::now();
    let mut app = App::start(5);

    advance_to(start, 0.5).await;
    let tray = app.tray();
    assert_eq!(tray.title, "▷ 00:05");
    assert!(tray.stop_enabled);
    assert!(!tray.continue_enabled);
    assert_eq!(tray.stats_label, "0 intervals passed");

    advance_to(start, 1.5).await;
    assert_eq!(app.tray().title, "▷ 00:04");

    advance_to(start, 5.5).await;
    let tray = app.tray();
    assert_eq!(tray.title, "□ 00:05");
    assert_eq!(tray.stats_label, "1 intervals passed");
    assert_eq!(app.notifier.notification_count(), 1);

    // Nothing else happens until a restart.
    advance_to(start, 20.5).await;
    assert_eq!(app.tray().title, "□ 00:05");
    assert_eq!(app.notifier.notification_count(), 1);

    app.quit().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_and_continue_keep_remaining_time() {
    let start = tokio::time::Instant::now();
    let mut app = App::start(3600);

    advance_to(start, 9.5).await;
    app.click(MenuAction::Stop);

    advance_to(start, 10.5).await;
    let tray = app.tray();
    assert_eq!(tray.title, "□ 59:50");
    assert!(!tray.stop_enabled);
    assert!(tray.continue_enabled);

    advance_to(start, 99.5).await;
    assert_eq!(app.tray().title, "□ 59:50");
    app.click(MenuAction::Continue);

    advance_to(start, 100.5).await;
    let tray = app.tray();
    assert_eq!(tray.title, "▷ 59:50");
    assert!(tray.stop_enabled);
    assert!(!tray.continue_enabled);

    advance_to(start, 110.5).await;
    assert_eq!(app.tray().title, "▷ 59:40");

    app.quit().await;
}

#[tokio::test(start_paused = true)]
async fn test_restart_restores_full_interval() {
    let start = tokio::time::Instant::now();
    let mut app = App::start(25 * 60);

    advance_to(start, 22.0 * 60.0 - 0.5).await;
    assert_eq!(app.tray().title, "▷ 03:01");
    app.click(MenuAction::Restart);

    advance_to(start, 22.0 * 60.0 + 0.5).await;
    assert_eq!(app.tray().title, "▷ 25:00");

    advance_to(start, 23.0 * 60.0 + 0.5).await;
    assert_eq!(app.tray().title, "▷ 24:00");

    app.quit().await;
}

#[tokio::test(start_paused = true)]
async fn test_timeout_disables_stop_and_continue_until_restart() {
    let start = tokio::time::Instant::now();
    let mut app = App::start(3);

    advance_to(start, 3.5).await;
    let tray = app.tray();
    assert!(!tray.stop_enabled);
    assert!(!tray.continue_enabled);

    app.click(MenuAction::Restart);
    advance_to(start, 4.5).await;
    let tray = app.tray();
    assert!(tray.stop_enabled);
    assert!(!tray.continue_enabled);
    assert_eq!(tray.title, "▷ 00:03");

    advance_to(start, 7.5).await;
    assert_eq!(app.tray().stats_label, "2 intervals passed");
    assert_eq!(app.notifier.notification_count(), 2);

    app.quit().await;
}

#[tokio::test(start_paused = true)]
async fn test_reset_stats() {
    let start = tokio::time::Instant::now();
    let mut app = App::start(2);

    advance_to(start, 2.5).await;
    assert_eq!(app.tray().stats_label, "1 intervals passed");

    app.click(MenuAction::ResetStats);
    advance_to(start, 3.0).await;
    assert_eq!(app.tray().stats_label, "0 intervals passed");

    app.quit().await;
}

#[tokio::test(start_paused = true)]
async fn test_notification_failure_keeps_running() {
    let start = tokio::time::Instant::now();
    let mut app = App::start(2);
    app.notifier.set_should_fail(true);

    advance_to(start, 2.5).await;
    assert_eq!(app.tray().stats_label, "1 intervals passed");

    app.click(MenuAction::Restart);
    advance_to(start, 3.5).await;
    assert_eq!(app.tray().title, "▷ 00:02");

    app.quit().await;
}
