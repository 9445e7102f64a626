//! Types for the timed feedback banner shown after a submission attempt.

use std::time::Duration;

/// Styling of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Failure,
}

/// Visibility phase of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackPhase {
    #[default]
    Hidden,
    Shown,
    FadingOut,
}

/// A scheduled phase change.
///
/// `generation` identifies the `show` call that scheduled it; ticks from an
/// older generation are stale and must not change the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTick {
    pub generation: u64,
    pub target: FeedbackPhase,
}

/// Delays between banner phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTiming {
    /// Time spent fully visible before fading starts.
    pub visible_for: Duration,
    /// Length of the fade before the banner is hidden.
    pub fade_for: Duration,
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self { visible_for: Duration::from_secs(5), fade_for: Duration::from_secs(1) }
    }
}

/// A message currently attached to the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub kind: FeedbackKind,
    pub text: String,
}
