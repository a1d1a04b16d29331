//! Timer engine for the tray timer.
//!
//! This module provides the authoritative countdown:
//! - State transitions (Running ⇄ Paused, Running → Expired, any → Running on restart)
//! - Once-per-second ticks with tokio::time::interval
//! - Title updates, events for the menu controller and the timeout notification
//!
//! Remaining time is always recomputed from the absolute deadline, so tick
//! jitter never accumulates.

use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::time::{interval, Duration, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::config::TimerConfig;
use crate::menubar::{running_title, stopped_title, TitleSink};
use crate::notification::{create_timeout_content, Notifier};
use crate::types::{TimerCommand, TimerEvent};

/// Tick cadence. Bounds display and command latency.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// TimerState
// ============================================================================

/// Countdown state owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Counting down towards `deadline`
    Running {
        /// Instant the countdown reaches zero
        deadline: Instant,
    },
    /// Stopped by the user with `remaining` left
    Paused {
        /// Remaining time frozen at the moment of the stop
        remaining: Duration,
    },
    /// Reached zero; waits for a restart
    Expired,
}

impl TimerState {
    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Running { .. } => "running",
            TimerState::Paused { .. } => "paused",
            TimerState::Expired => "expired",
        }
    }

    /// Returns true if the timer is counting down.
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running { .. })
    }

    /// Returns true if the timer was stopped by the user.
    pub fn is_paused(&self) -> bool {
        matches!(self, TimerState::Paused { .. })
    }

    /// Remaining time as of `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        match *self {
            TimerState::Running { deadline } => deadline.saturating_duration_since(now),
            TimerState::Paused { remaining } => remaining,
            TimerState::Expired => Duration::ZERO,
        }
    }
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that owns the countdown and reacts to commands.
pub struct TimerEngine<T, N> {
    config: TimerConfig,
    state: TimerState,
    title_sink: T,
    notifier: N,
    command_rx: mpsc::Receiver<TimerCommand>,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl<T: TitleSink, N: Notifier> TimerEngine<T, N> {
    /// Creates a new TimerEngine.
    ///
    /// The countdown is armed immediately; `run` restarts it and announces
    /// it with a `Started` event.
    pub fn new(
        config: TimerConfig,
        title_sink: T,
        notifier: N,
        command_rx: mpsc::Receiver<TimerCommand>,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> Self {
        let deadline = Instant::now() + config.interval();
        Self {
            config,
            state: TimerState::Running { deadline },
            title_sink,
            notifier,
            command_rx,
            event_tx,
        }
    }

    /// Runs the tick loop until `shutdown` is cancelled or the command
    /// channel closes.
    ///
    /// This should be spawned as a separate tokio task.
    pub async fn run(mut self, shutdown: CancellationToken) {
        self.start(Instant::now());

        let mut ticker = interval(TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    if !self.step(Instant::now()) {
                        break;
                    }
                }
            }
        }

        tracing::debug!(state = self.state.as_str(), "timer engine stopped");
    }

    /// Performs one tick: applies at most one pending command, then
    /// re-evaluates the countdown.
    ///
    /// Returns `false` if the command channel is closed.
    pub fn step(&mut self, now: Instant) -> bool {
        match self.command_rx.try_recv() {
            Ok(command) => self.handle_command(command, now),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                tracing::debug!("command channel closed");
                return false;
            }
        }

        self.tick(now);
        true
    }

    /// (Re)starts the countdown from the full interval.
    pub fn start(&mut self, now: Instant) {
        self.state = TimerState::Running {
            deadline: now + self.config.interval(),
        };
        self.emit(TimerEvent::Started);
    }

    /// Applies a command.
    ///
    /// Commands that do not apply to the current state are ignored.
    pub fn handle_command(&mut self, command: TimerCommand, now: Instant) {
        tracing::debug!(command = %command, state = self.state.as_str(), "timer command");

        match (command, self.state) {
            (TimerCommand::Stop, TimerState::Running { deadline }) => {
                let remaining = deadline.saturating_duration_since(now);
                self.state = TimerState::Paused { remaining };
                self.title_sink
                    .set_title(&stopped_title(&self.config, remaining));
                self.emit(TimerEvent::Paused);
            }
            (TimerCommand::Continue, TimerState::Paused { remaining }) => {
                self.state = TimerState::Running {
                    deadline: now + remaining,
                };
                self.emit(TimerEvent::Started);
            }
            (TimerCommand::Restart, _) => self.start(now),
            (command, state) => {
                tracing::debug!(
                    command = %command,
                    state = state.as_str(),
                    "command does not apply, ignoring"
                );
            }
        }
    }

    /// Re-evaluates a running countdown: refreshes the title or expires it.
    pub fn tick(&mut self, now: Instant) {
        let TimerState::Running { deadline } = self.state else {
            return;
        };

        let remaining = deadline.saturating_duration_since(now);
        if remaining.is_zero() {
            self.expire();
        } else {
            self.title_sink
                .set_title(&running_title(&self.config, remaining));
        }
    }

    /// Handles a natural timeout.
    fn expire(&mut self) {
        self.state = TimerState::Expired;

        // The stopped title shows what the next run will be, not zero.
        self.title_sink
            .set_title(&stopped_title(&self.config, self.config.interval()));
        self.emit(TimerEvent::TimedOut);

        let content = create_timeout_content(&self.config);
        if let Err(e) = self.notifier.notify(&content.title, &content.message) {
            tracing::error!(
                error = %e,
                suggestion = e.suggestion(),
                "failed to send timeout notification"
            );
        }
    }

    fn emit(&self, event: TimerEvent) {
        tracing::info!(event = %event, "timer event");
        if self.event_tx.send(event).is_err() {
            tracing::debug!(event = %event, "event receiver dropped");
        }
    }

    /// Returns the current timer state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }
}

// ============================================================================
// Tests
// ============================================================================
