pub mod commands;
mod context;
pub mod editor;
pub mod feedback;
pub mod session_gate;

pub use context::AppContext;
pub use editor::{EditorMode, ObservationEditor, SubmitOutcome};
pub use feedback::TransientMessageController;
pub use session_gate::{CREDENTIAL_MISMATCH, LoginForm, LoginOutcome, SessionGate};
