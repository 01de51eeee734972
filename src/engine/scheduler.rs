//! Deferred work on a logical clock.
//!
//! The engine never sleeps. Timers are queued against a logical `now` that
//! only moves when the host calls [`Scheduler::pop_due`] with a later
//! instant, so tests can drive a whole game without waiting and an async
//! host can map deadlines onto real time.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use tracing::trace;

use crate::core::Color;

/// A deferred transition.
///
/// Each timer remembers the snapshot version and turn it was scheduled in.
/// When it fires against anything else it is stale and must do nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Settle the dice for an in-flight roll.
    RollComplete { version: u64, turn: Color },

    /// Pass a turn whose roll has no legal move.
    AutoPass { version: u64, turn: Color },
}

impl Timer {
    /// Version the timer was scheduled against.
    #[must_use]
    pub fn version(&self) -> u64 {
        match *self {
            Timer::RollComplete { version, .. } | Timer::AutoPass { version, .. } => version,
        }
    }

    /// Turn the timer was scheduled in.
    #[must_use]
    pub fn turn(&self) -> Color {
        match *self {
            Timer::RollComplete { turn, .. } | Timer::AutoPass { turn, .. } => turn,
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    due: Duration,
    seq: u64,
    timer: Timer,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Ties on `due` fire in scheduling order.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Min-heap of timers keyed by due time.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Reverse<Entry>>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `timer` to fire `delay` after now.
    pub fn schedule(&mut self, delay: Duration, timer: Timer) {
        let due = self.now + delay;
        trace!(?timer, ?due, "timer scheduled");
        self.queue.push(Reverse(Entry {
            due,
            seq: self.seq,
            timer,
        }));
        self.seq += 1;
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to the timer's due time, so anything scheduled while
    /// handling it is relative to when it fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<Timer> {
        let Reverse(head) = self.queue.peek()?;
        if head.due > until {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        trace!(timer = ?entry.timer, due = ?entry.due, "timer fired");
        Some(entry.timer)
    }

    /// Move the clock forward. Never moves it back.
    pub fn advance_to(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }

    /// When the earliest timer is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Number of queued timers, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
