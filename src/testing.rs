//! Host-side fakes for the browser services.

use crate::scheduler::{BoardEvent, Scheduler};
use crate::{AlarmPlayer, Notifier, TimerBoard};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Entry {
    due_ms: u64,
    period_ms: Option<u64>,
    event: BoardEvent,
    live: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    entries: Vec<Entry>,
}

/// Virtual-time scheduler. Nothing fires until the test advances the clock.
#[derive(Default, Clone)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its interval when dropped, like a gloo `Interval`.
pub struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl ManualScheduler {
    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn live_intervals(&self) -> usize {
        self.clock
            .borrow()
            .entries
            .iter()
            .filter(|e| e.period_ms.is_some() && e.live.get())
            .count()
    }

    /// Pop the earliest live event due at or before `until_ms`, moving the
    /// clock to its due time. Ties go to the earliest scheduled.
    pub fn pop_due(&self, until_ms: u64) -> Option<BoardEvent> {
        let mut clock = self.clock.borrow_mut();
        clock.entries.retain(|e| e.live.get());

        let idx = clock
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= until_ms)
            .min_by_key(|(i, e)| (e.due_ms, *i))
            .map(|(i, _)| i)?;

        let (due, event, period) = {
            let entry = &clock.entries[idx];
            (entry.due_ms, entry.event, entry.period_ms)
        };
        match period {
            Some(period) => clock.entries[idx].due_ms += period,
            None => {
                clock.entries.remove(idx);
            }
        }
        clock.now_ms = due;
        Some(event)
    }

    fn set_now(&self, now_ms: u64) {
        self.clock.borrow_mut().now_ms = now_ms;
    }

    fn push(&self, delay_ms: u32, period_ms: Option<u32>, event: BoardEvent) -> Rc<Cell<bool>> {
        let live = Rc::new(Cell::new(true));
        let mut clock = self.clock.borrow_mut();
        let due_ms = clock.now_ms + u64::from(delay_ms);
        clock.entries.push(Entry {
            due_ms,
            period_ms: period_ms.map(u64::from),
            event,
            live: live.clone(),
        });
        live
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn every(&self, period_ms: u32, event: BoardEvent) -> ManualHandle {
        ManualHandle(self.push(period_ms, Some(period_ms), event))
    }

    fn after(&self, delay_ms: u32, event: BoardEvent) {
        self.push(delay_ms, None, event);
    }
}

/// Run the board's scheduler forward by `ms`, delivering every due event.
pub fn advance(board: &mut TimerBoard<ManualScheduler>, ms: u64) {
    let until = board.scheduler().now_ms() + ms;
    while let Some(event) = board.scheduler().pop_due(until) {
        board.handle(event);
    }
    board.scheduler().set_now(until);
}

/// Alarm that counts calls and tracks a pretend playback position.
#[derive(Default)]
pub struct RecordingAlarm {
    plays: Cell<usize>,
    stops: Cell<usize>,
    playing: Cell<bool>,
    position_ms: Cell<u64>,
}

impl RecordingAlarm {
    pub fn plays(&self) -> usize {
        self.plays.get()
    }

    pub fn stops(&self) -> usize {
        self.stops.get()
    }

    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    pub fn position_ms(&self) -> u64 {
        self.position_ms.get()
    }

    pub fn seek(&self, position_ms: u64) {
        self.position_ms.set(position_ms);
    }
}

impl AlarmPlayer for RecordingAlarm {
    fn play(&self) {
        self.plays.set(self.plays.get() + 1);
        self.playing.set(true);
    }

    fn stop(&self) {
        self.stops.set(self.stops.get() + 1);
        self.playing.set(false);
        self.position_ms.set(0);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
