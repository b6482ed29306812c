//! A single countdown and its start/stop/reset state machine.

use crate::config::{DEFAULT_LABEL, TICK_MS, TIME_UP_MESSAGE};
use crate::scheduler::{BoardEvent, Scheduler};
use crate::{AlarmPlayer, Notifier, Remaining, TimerId};
use log::{debug, info};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Full duration, never started or reset since
    Idle,
    Running,
    /// Paused part way through
    Stopped,
}

/// Which buttons a timer offers. Always derived from the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub stop: bool,
    pub reset: bool,
    pub delete: bool,
}

impl From<TimerPhase> for Controls {
    fn from(phase: TimerPhase) -> Self {
        match phase {
            TimerPhase::Idle => Controls { start: true, stop: false, reset: false, delete: true },
            TimerPhase::Running => Controls { start: false, stop: true, reset: true, delete: true },
            TimerPhase::Stopped => Controls { start: true, stop: false, reset: true, delete: true },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running, nothing changed
    Ignored,
    Counted,
    /// Reached zero: alarm fired and the timer went back to its full duration
    Expired,
}

pub struct TimerInstance<H> {
    id: TimerId,
    label: String,
    initial: Remaining,
    remaining: Remaining,
    phase: TimerPhase,
    ticker: Option<H>,
    alarm: Rc<dyn AlarmPlayer>,
    notifier: Rc<dyn Notifier>,
}

impl<H> fmt::Debug for TimerInstance<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerInstance")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("initial", &self.initial)
            .field("remaining", &self.remaining)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<H> TimerInstance<H> {
    /// A blank label falls back to "Custom Timer".
    pub fn new(
        id: TimerId,
        initial: Remaining,
        label: &str,
        alarm: Rc<dyn AlarmPlayer>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let label = match label.trim() {
            "" => DEFAULT_LABEL.to_string(),
            l => l.to_string(),
        };
        Self {
            id,
            label,
            initial,
            remaining: initial,
            phase: TimerPhase::Idle,
            ticker: None,
            alarm,
            notifier,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn initial(&self) -> Remaining {
        self.initial
    }

    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn controls(&self) -> Controls {
        self.phase.into()
    }

    pub fn display(&self) -> String {
        self.remaining.to_string()
    }

    /// Begin ticking once per second. Returns `false` if already running.
    pub fn start<S>(&mut self, scheduler: &S) -> bool
    where
        S: Scheduler<Handle = H>,
    {
        if self.is_running() {
            return false;
        }
        self.ticker = Some(scheduler.every(TICK_MS, BoardEvent::Tick(self.id)));
        self.phase = TimerPhase::Running;
        info!("{} \"{}\" started at {}", self.id, self.label, self.remaining);
        true
    }

    /// Pause a running countdown. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.ticker = None;
        self.phase = TimerPhase::Stopped;
        info!("{} stopped at {}", self.id, self.remaining);
        true
    }

    /// Back to the full duration, not running.
    pub fn reset(&mut self) {
        self.ticker = None;
        self.remaining = self.initial;
        self.phase = TimerPhase::Idle;
        debug!("{} reset to {}", self.id, self.initial);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        self.remaining.decrement();
        if !self.remaining.is_zero() {
            debug!("{} tick: {}", self.id, self.remaining);
            return TickOutcome::Counted;
        }

        info!("{} \"{}\" finished", self.id, self.label);
        self.ticker = None;
        self.alarm.play();
        self.notifier.notify(TIME_UP_MESSAGE);
        self.reset();
        TickOutcome::Expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, RecordingAlarm, RecordingNotifier};

    type Instance = TimerInstance<<ManualScheduler as Scheduler>::Handle>;

    fn instance(minutes: u32, seconds: u32, label: &str) -> (Instance, Rc<RecordingAlarm>, Rc<RecordingNotifier>) {
        let alarm = Rc::new(RecordingAlarm::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let timer = TimerInstance::new(
            TimerId(1),
            Remaining::new(minutes, seconds).unwrap(),
            label,
            alarm.clone(),
            notifier.clone(),
        );
        (timer, alarm, notifier)
    }

    #[test]
    fn controls_follow_phase() {
        assert_eq!(
            Controls::from(TimerPhase::Idle),
            Controls { start: true, stop: false, reset: false, delete: true }
        );
        assert_eq!(
            Controls::from(TimerPhase::Running),
            Controls { start: false, stop: true, reset: true, delete: true }
        );
        assert_eq!(
            Controls::from(TimerPhase::Stopped),
            Controls { start: true, stop: false, reset: true, delete: true }
        );
    }

    #[test]
    fn new_timer_is_idle_and_shows_its_duration() {
        let (timer, _, _) = instance(1, 30, "Tea");
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.display(), "01:30");
        assert_eq!(timer.label(), "Tea");
    }

    #[test]
    fn blank_label_becomes_custom_timer() {
        let (timer, _, _) = instance(1, 0, "   ");
        assert_eq!(timer.label(), DEFAULT_LABEL);
    }

    #[test]
    fn start_twice_has_no_extra_effect() {
        let scheduler = ManualScheduler::default();
        let (mut timer, _, _) = instance(0, 5, "");
        assert!(timer.start(&scheduler));
        assert!(!timer.start(&scheduler));
        assert_eq!(scheduler.live_intervals(), 1);
        assert!(!timer.controls().start);
        assert!(timer.controls().stop);
        assert!(timer.controls().reset);
    }

    #[test]
    fn tick_borrows_minutes() {
        let scheduler = ManualScheduler::default();
        let (mut timer, _, _) = instance(1, 0, "");
        timer.start(&scheduler);
        assert_eq!(timer.tick(), TickOutcome::Counted);
        assert_eq!(timer.display(), "00:59");
    }

    #[test]
    fn stop_cancels_the_ticker() {
        let scheduler = ManualScheduler::default();
        let (mut timer, _, _) = instance(0, 30, "");
        timer.start(&scheduler);
        timer.tick();
        assert!(timer.stop());
        assert_eq!(scheduler.live_intervals(), 0);
        assert_eq!(timer.phase(), TimerPhase::Stopped);
        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.display(), "00:29");
        assert!(!timer.stop());
    }

    #[test]
    fn reset_restores_initial_duration_from_any_phase() {
        let scheduler = ManualScheduler::default();
        let (mut timer, _, _) = instance(2, 5, "");

        timer.reset();
        assert_eq!(timer.remaining(), timer.initial());

        timer.start(&scheduler);
        timer.tick();
        timer.tick();
        timer.reset();
        assert_eq!(timer.display(), "02:05");
        assert_eq!(timer.controls(), Controls::from(TimerPhase::Idle));
        assert_eq!(scheduler.live_intervals(), 0);

        timer.start(&scheduler);
        timer.tick();
        timer.stop();
        timer.reset();
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.display(), "02:05");
    }

    #[test]
    fn expiry_fires_alarm_once_and_resets() {
        let scheduler = ManualScheduler::default();
        let (mut timer, alarm, notifier) = instance(0, 3, "Quick");
        timer.start(&scheduler);

        assert_eq!(timer.tick(), TickOutcome::Counted);
        assert_eq!(timer.tick(), TickOutcome::Counted);
        assert_eq!(timer.display(), "00:01");
        assert_eq!(timer.tick(), TickOutcome::Expired);

        assert_eq!(alarm.plays(), 1);
        assert_eq!(notifier.messages(), vec![TIME_UP_MESSAGE.to_string()]);
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.display(), "00:03");
        assert_eq!(scheduler.live_intervals(), 0);
        assert_eq!(timer.tick(), TickOutcome::Ignored);
    }
}
