//! Timed feedback banner.

use tracing::trace;

use crate::domain::{FeedbackKind, FeedbackMessage, FeedbackPhase, FeedbackTick, FeedbackTiming};
use crate::ports::FeedbackTimer;

/// Finite-state banner: `Hidden → Shown → FadingOut → Hidden`.
///
/// Each `show` starts a new generation and schedules its own fade and hide
/// ticks; ticks from earlier generations are ignored, so a second `show`
/// restarts the schedule. After `detach` every tick and `show` is a no-op.
#[derive(Debug, Clone)]
pub struct TransientMessageController {
    timing: FeedbackTiming,
    phase: FeedbackPhase,
    message: Option<FeedbackMessage>,
    generation: u64,
    detached: bool,
}

impl TransientMessageController {
    pub fn new(timing: FeedbackTiming) -> Self {
        Self { timing, phase: FeedbackPhase::Hidden, message: None, generation: 0, detached: false }
    }

    /// Show a message and (re)start the fade schedule.
    pub fn show(&mut self, kind: FeedbackKind, text: impl Into<String>, timer: &impl FeedbackTimer) {
        if self.detached {
            return;
        }
        self.generation += 1;
        self.phase = FeedbackPhase::Shown;
        self.message = Some(FeedbackMessage { kind, text: text.into() });

        let generation = self.generation;
        timer.schedule(
            self.timing.visible_for,
            FeedbackTick { generation, target: FeedbackPhase::FadingOut },
        );
        timer.schedule(
            self.timing.visible_for + self.timing.fade_for,
            FeedbackTick { generation, target: FeedbackPhase::Hidden },
        );
    }

    pub fn current_phase(&self) -> FeedbackPhase {
        self.phase
    }

    /// The visible message, if the banner is not hidden.
    pub fn message(&self) -> Option<&FeedbackMessage> {
        match self.phase {
            FeedbackPhase::Hidden => None,
            _ => self.message.as_ref(),
        }
    }

    /// Apply a scheduled tick. Returns whether the phase changed.
    pub fn on_tick(&mut self, tick: FeedbackTick) -> bool {
        if self.detached || tick.generation != self.generation {
            trace!(?tick, current = self.generation, "ignoring stale feedback tick");
            return false;
        }
        let next = match (self.phase, tick.target) {
            (FeedbackPhase::Shown, FeedbackPhase::FadingOut) => FeedbackPhase::FadingOut,
            (FeedbackPhase::Shown | FeedbackPhase::FadingOut, FeedbackPhase::Hidden) => {
                FeedbackPhase::Hidden
            }
            _ => return false,
        };
        self.phase = next;
        if next == FeedbackPhase::Hidden {
            self.message = None;
        }
        true
    }

    /// Stop reacting to ticks; the owning view is gone.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}
