//! Scheduled callbacks feeding the board: per-timer ticks and the one-shot
//! Pomodoro break.
//!
//! The board never runs closures itself. A scheduler turns "fire this event
//! later" into whatever the host offers and delivers the event back through
//! `TimerBoard::handle`. In the browser that is `gloo_timers` plus a Yew
//! callback; in tests it is a virtual clock.

use crate::TimerId;
use gloo_timers::callback::{Interval, Timeout};
use yew::Callback;

/// Events a scheduler delivers back to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// One second elapsed for the given timer
    Tick(TimerId),
    /// The Pomodoro work period is over, create the break timer
    BreakDue,
}

pub trait Scheduler {
    /// Handle for a periodic event. Dropping it cancels the event for good.
    type Handle;

    /// Deliver `event` every `period_ms` until the returned handle is dropped.
    fn every(&self, period_ms: u32, event: BoardEvent) -> Self::Handle;

    /// Deliver `event` once after `delay_ms`. Cannot be cancelled.
    fn after(&self, delay_ms: u32, event: BoardEvent);
}

/// Browser scheduler backed by `setInterval`/`setTimeout`.
#[derive(Clone)]
pub struct GlooScheduler {
    deliver: Callback<BoardEvent>,
}

impl GlooScheduler {
    pub fn new(deliver: Callback<BoardEvent>) -> Self {
        Self { deliver }
    }
}

impl Scheduler for GlooScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, event: BoardEvent) -> Interval {
        let deliver = self.deliver.clone();
        Interval::new(period_ms, move || deliver.emit(event))
    }

    fn after(&self, delay_ms: u32, event: BoardEvent) {
        let deliver = self.deliver.clone();
        // Forgotten on purpose: the break is never cancelled once scheduled.
        let _ = Timeout::new(delay_ms, move || deliver.emit(event)).forget();
    }
}
