//! Shared protocol between the timer engine and the menu controller.
//!
//! Two one-directional message types:
//! - `TimerCommand`: controller → engine, requests a state transition
//! - `TimerEvent`: engine → controller, reports a state transition

use std::fmt;

// ============================================================================
// TimerCommand
// ============================================================================

/// Commands the menu controller sends to the timer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerCommand {
    /// Freeze the countdown, keeping the remaining time
    Stop,
    /// Resume a stopped countdown from the frozen remaining time
    Continue,
    /// Start over from the full configured interval
    Restart,
}

impl TimerCommand {
    /// Returns the string representation of the command.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerCommand::Stop => "stop",
            TimerCommand::Continue => "continue",
            TimerCommand::Restart => "restart",
        }
    }
}

impl fmt::Display for TimerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TimerEvent
// ============================================================================

/// Events the timer engine reports back to the menu controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Countdown is running (initial start, continue, or restart)
    Started,
    /// Countdown was stopped by the user
    Paused,
    /// Countdown reached zero
    TimedOut,
}

impl TimerEvent {
    /// Returns the string representation of the event.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerEvent::Started => "started",
            TimerEvent::Paused => "paused",
            TimerEvent::TimedOut => "timed_out",
        }
    }
}

impl fmt::Display for TimerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
