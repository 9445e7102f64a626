use std::time::Duration;

use crate::domain::FeedbackTick;

/// Scheduler the feedback banner uses to request future phase changes.
///
/// Ticks are delivered back to the banner by whoever drives the event loop.
pub trait FeedbackTimer {
    fn schedule(&self, after: Duration, tick: FeedbackTick);
}
