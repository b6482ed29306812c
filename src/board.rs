//! The timer registry and the board-wide commands: adding timers, the
//! Pomodoro pair, stop music and the theme.

use crate::config::{
    BREAK_DELAY_MS, BREAK_LABEL, BREAK_MESSAGE, POMODORO_BREAK_MINUTES, POMODORO_LABEL,
    POMODORO_WORK_MINUTES,
};
use crate::scheduler::{BoardEvent, Scheduler};
use crate::timer::{Controls, TimerInstance, TimerPhase};
use crate::utils::parse_timer_request;
use crate::{AlarmPlayer, Notifier, Remaining, Theme, TimerError, TimerId};
use log::{debug, info, warn};
use std::rc::Rc;

/// Render-ready snapshot of one timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerView {
    pub id: TimerId,
    pub label: String,
    pub display: String,
    pub phase: TimerPhase,
    pub controls: Controls,
}

pub struct TimerBoard<S: Scheduler> {
    scheduler: S,
    alarm: Rc<dyn AlarmPlayer>,
    notifier: Rc<dyn Notifier>,
    timers: Vec<TimerInstance<S::Handle>>,
    next_id: u64,
    theme: Theme,
}

impl<S: Scheduler> TimerBoard<S> {
    pub fn new(scheduler: S, alarm: Rc<dyn AlarmPlayer>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            scheduler,
            alarm,
            notifier,
            timers: Vec::new(),
            next_id: 1,
            theme: Theme::default(),
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Timers in creation order.
    pub fn timers(&self) -> impl Iterator<Item = &TimerInstance<S::Handle>> {
        self.timers.iter()
    }

    pub fn get(&self, id: TimerId) -> Option<&TimerInstance<S::Handle>> {
        self.timers.iter().find(|t| t.id() == id)
    }

    pub fn views(&self) -> Vec<TimerView> {
        self.timers
            .iter()
            .map(|t| TimerView {
                id: t.id(),
                label: t.label().to_string(),
                display: t.display(),
                phase: t.phase(),
                controls: t.controls(),
            })
            .collect()
    }

    // ──────────────────────────────────────────────────────────────────────
    // Board commands

    /// Append a new idle timer. A zero duration is refused and the user is
    /// told so.
    pub fn add_timer(&mut self, minutes: u32, seconds: u32, label: &str) -> Result<TimerId, TimerError> {
        let initial = Remaining::new(minutes, seconds)
            .and_then(|r| if r.is_zero() { Err(TimerError::EmptyDuration) } else { Ok(r) })
            .map_err(|e| self.reject(e))?;
        Ok(self.push_timer(initial, label))
    }

    /// Add a timer straight from the raw form fields.
    pub fn submit(&mut self, minutes: &str, seconds: &str, label: &str) -> Result<TimerId, TimerError> {
        let request = parse_timer_request(minutes, seconds, label).map_err(|e| self.reject(e))?;
        self.add_timer(request.minutes, request.seconds, &request.label)
    }

    /// Create the 25-minute work timer and schedule the break timer for 25
    /// minutes from now, whatever happens to the work timer meanwhile.
    pub fn start_pomodoro(&mut self) -> TimerId {
        let id = self.push_timer(Remaining::from_minutes(POMODORO_WORK_MINUTES), POMODORO_LABEL);
        self.scheduler.after(BREAK_DELAY_MS, BoardEvent::BreakDue);
        info!("Pomodoro started, break due in {} ms", BREAK_DELAY_MS);
        id
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!("Theme is now {:?}", self.theme);
        self.theme
    }

    pub fn stop_music(&self) {
        self.alarm.stop();
    }

    // ──────────────────────────────────────────────────────────────────────
    // Per-timer commands

    /// Returns `Ok(false)` when the timer was already running.
    pub fn start(&mut self, id: TimerId) -> Result<bool, TimerError> {
        let scheduler = &self.scheduler;
        let timer = self
            .timers
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TimerError::UnknownTimer(id))?;
        Ok(timer.start(scheduler))
    }

    /// Returns `Ok(false)` when the timer was not running.
    pub fn stop(&mut self, id: TimerId) -> Result<bool, TimerError> {
        Ok(self.timer_mut(id)?.stop())
    }

    pub fn reset(&mut self, id: TimerId) -> Result<(), TimerError> {
        self.timer_mut(id)?.reset();
        Ok(())
    }

    /// Remove a timer for good. Its ticker is cancelled before it is dropped.
    pub fn delete(&mut self, id: TimerId) -> Result<(), TimerError> {
        let idx = self
            .timers
            .iter()
            .position(|t| t.id() == id)
            .ok_or(TimerError::UnknownTimer(id))?;
        let mut timer = self.timers.remove(idx);
        timer.reset();
        info!("{} \"{}\" deleted", id, timer.label());
        Ok(())
    }

    /// Entry point for everything the scheduler fires.
    pub fn handle(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::Tick(id) => match self.timer_mut(id) {
                Ok(timer) => {
                    timer.tick();
                }
                Err(_) => debug!("Dropping tick for removed {}", id),
            },
            BoardEvent::BreakDue => {
                self.notifier.notify(BREAK_MESSAGE);
                self.push_timer(Remaining::from_minutes(POMODORO_BREAK_MINUTES), BREAK_LABEL);
            }
        }
    }

    // ──────────────────────────────────────────────────────────────────────

    fn push_timer(&mut self, initial: Remaining, label: &str) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let timer = TimerInstance::new(id, initial, label, self.alarm.clone(), self.notifier.clone());
        info!("{} \"{}\" created for {}", id, timer.label(), initial);
        self.timers.push(timer);
        id
    }

    fn timer_mut(&mut self, id: TimerId) -> Result<&mut TimerInstance<S::Handle>, TimerError> {
        self.timers
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TimerError::UnknownTimer(id))
    }

    fn reject(&self, error: TimerError) -> TimerError {
        warn!("Rejected timer request: {}", error);
        self.notifier.notify(&error.to_string());
        error
    }
}
