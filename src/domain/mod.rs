pub mod configuration;
pub mod error;
pub mod feedback;
pub mod observation;
pub mod route;
pub mod session;

pub use configuration::{
    AppConfig, AuthConfig, FeedbackConfig, SessionConfig, StoreConfig, parse_config_content,
};
pub use error::AppError;
pub use feedback::{FeedbackKind, FeedbackMessage, FeedbackPhase, FeedbackTick, FeedbackTiming};
pub use observation::{
    CreatedObservation, DraftField, ObservationDraft, ValidationErrors, WeatherObservation,
    normalize, validate,
};
pub use route::{GuardDecision, Route, guard};
pub use session::{ADMIN_ROLE, Credentials, ROLE_ATTRIBUTE, Role, SessionAttribute};
