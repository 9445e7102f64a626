use chrono::{DateTime, Utc};

use super::session_gate::SessionGate;
use crate::domain::FeedbackTiming;
use crate::ports::{Clock, ObservationStore, SessionStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<O: ObservationStore, S: SessionStore, K: Clock> {
    store: O,
    gate: SessionGate<S, K>,
    feedback: FeedbackTiming,
}

impl<O: ObservationStore, S: SessionStore, K: Clock> AppContext<O, S, K> {
    /// Create a new application context.
    pub fn new(store: O, gate: SessionGate<S, K>, feedback: FeedbackTiming) -> Self {
        Self { store, gate, feedback }
    }

    /// Get a reference to the observation store.
    pub fn store(&self) -> &O {
        &self.store
    }

    /// Get a reference to the session gate.
    pub fn gate(&self) -> &SessionGate<S, K> {
        &self.gate
    }

    pub fn feedback_timing(&self) -> FeedbackTiming {
        self.feedback
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.gate.now()
    }
}
