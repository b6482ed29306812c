//! Core of the multi-timer board: countdown instances, the registry that owns
//! them, the Pomodoro pair and the shared alarm. Everything here runs on the
//! host as well as in the browser; the browser-only pieces sit behind the
//! `AlarmPlayer`, `Notifier` and `Scheduler` traits.

use std::fmt;

pub mod alarm;
pub mod board;
pub mod config;
pub mod logging;
pub mod notify;
pub mod scheduler;
pub mod theme;
pub mod timer;
pub mod utils;

#[cfg(test)]
mod testing;

pub use alarm::{AlarmPlayer, AudioAlarm};
pub use board::{TimerBoard, TimerView};
pub use notify::{BrowserNotifier, Notifier};
pub use scheduler::{BoardEvent, GlooScheduler, Scheduler};
pub use theme::Theme;
pub use timer::{Controls, TickOutcome, TimerInstance, TimerPhase};

/// Opaque identity of a timer, unique for the lifetime of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Minutes and seconds left on a countdown. Seconds stay within 0-59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    minutes: u32,
    seconds: u32,
}

impl Remaining {
    pub fn new(minutes: u32, seconds: u32) -> Result<Self, TimerError> {
        if seconds > config::MAX_SECONDS {
            return Err(TimerError::SecondsOutOfRange(seconds));
        }
        Ok(Self { minutes, seconds })
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes, seconds: 0 }
    }

    pub fn is_zero(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    /// Count down one second, borrowing a minute when the seconds run out.
    /// Saturates at zero.
    pub fn decrement(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = config::MAX_SECONDS;
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_clock(self.minutes, self.seconds))
    }
}

/// Format a minutes/seconds pair as `MM:SS`.
pub fn format_clock(minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}", minutes, seconds)
}

/// Everything that can go wrong while handling a board command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// Both minutes and seconds were zero
    EmptyDuration,
    SecondsOutOfRange(u32),
    InvalidField { field: &'static str, input: String },
    UnknownTimer(TimerId),
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::EmptyDuration => write!(f, "Please enter a valid time."),
            TimerError::SecondsOutOfRange(s) => {
                write!(f, "Invalid seconds: {} (must be 0-{})", s, config::MAX_SECONDS)
            }
            TimerError::InvalidField { field, input } => {
                write!(f, "{} must be a whole number, got \"{}\"", field, input)
            }
            TimerError::UnknownTimer(id) => write!(f, "No timer with id {}", id),
        }
    }
}

impl std::error::Error for TimerError {}
