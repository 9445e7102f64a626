mod clock;
mod feedback_timer;
mod observation_store;
mod session_store;

pub use clock::Clock;
pub use feedback_timer::FeedbackTimer;
pub use observation_store::ObservationStore;
pub use session_store::SessionStore;
