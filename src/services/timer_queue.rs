//! Virtual-time scheduler for feedback ticks.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::domain::FeedbackTick;
use crate::ports::FeedbackTimer;

/// Ticks scheduled against a manually advanced clock.
///
/// `advance_to` releases due ticks in firing order; ticks due at the same
/// instant keep their scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    pending: RefCell<Vec<(Duration, u64, FeedbackTick)>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of ticks not yet released.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward to `instant` and return every tick due by then.
    pub fn advance_to(&self, instant: Duration) -> Vec<FeedbackTick> {
        if instant > self.now.get() {
            self.now.set(instant);
        }
        let now = self.now.get();
        let mut pending = self.pending.borrow_mut();
        pending.sort_by_key(|(due, seq, _)| (*due, *seq));
        let split = pending.partition_point(|(due, _, _)| *due <= now);
        pending.drain(..split).map(|(_, _, tick)| tick).collect()
    }
}

impl FeedbackTimer for TimerQueue {
    fn schedule(&self, after: Duration, tick: FeedbackTick) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.pending.borrow_mut().push((self.now.get() + after, seq, tick));
    }
}
