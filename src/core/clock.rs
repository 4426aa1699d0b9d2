//! Time sources and the timer queue that drives delayed game events.
//!
//! The engine never reads the wall clock. Front ends ask a [`Clock`] for the
//! current time and pass it to `Game::tick`, which drains the
//! [`TimerQueue`]. Tests use [`ManualClock`] to step time explicitly.

use chrono::Utc;
use std::cell::Cell;

/// Milliseconds since the unix epoch.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) -> u64 {
        let now = self.now.get() + delta_ms;
        self.now.set(now);
        now
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// A timer popped from the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<E> {
    pub id: TimerId,
    pub due_ms: u64,
    pub event: E,
}

#[derive(Debug, Clone)]
struct Timer<E> {
    id: TimerId,
    due_ms: u64,
    interval_ms: Option<u64>,
    event: E,
}

/// Pending timers keyed by id. Due timers fire in due-time order, ties in
/// scheduling order.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    timers: Vec<Timer<E>>,
    next_id: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 1,
        }
    }
}

impl<E: Clone> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, due_ms: u64, interval_ms: Option<u64>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due_ms,
            interval_ms,
            event,
        });
        id
    }

    /// One-shot timer firing at `now_ms + delay_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, event: E) -> TimerId {
        self.push(now_ms + delay_ms, None, event)
    }

    /// Timer firing every `interval_ms` until cancelled. A zero interval is
    /// treated as 1 ms.
    pub fn schedule_repeating(&mut self, now_ms: u64, interval_ms: u64, event: E) -> TimerId {
        let interval = interval_ms.max(1);
        self.push(now_ms + interval, Some(interval), event)
    }

    /// Removes a timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        before != self.timers.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Pops the earliest timer due at `now_ms`, rescheduling it if it
    /// repeats. Handling events one at a time lets a handler cancel timers
    /// that would otherwise fire later in the same pass.
    pub fn pop_next(&mut self, now_ms: u64) -> Option<Fired<E>> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id.0))
            .map(|(i, _)| i)?;

        match self.timers[index].interval_ms {
            Some(interval) => {
                let timer = &mut self.timers[index];
                let fired = Fired {
                    id: timer.id,
                    due_ms: timer.due_ms,
                    event: timer.event.clone(),
                };
                timer.due_ms += interval;
                Some(fired)
            }
            None => {
                let timer = self.timers.swap_remove(index);
                Some(Fired {
                    id: timer.id,
                    due_ms: timer.due_ms,
                    event: timer.event,
                })
            }
        }
    }

    /// Drains everything due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Vec<Fired<E>> {
        let mut fired = Vec::new();
        while let Some(entry) = self.pop_next(now_ms) {
            fired.push(entry);
        }
        fired
    }
}
