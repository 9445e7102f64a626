//! Observation drafts, their wire form, and validation.

pub mod draft;
pub mod field;
pub mod validation;
pub mod wire;

pub use draft::{ObservationDraft, normalize, parse_measurement};
pub use field::DraftField;
pub use validation::{ValidationErrors, validate};
pub use wire::{
    CreatedObservation, WeatherObservation, calendar_date, format_instant, parse_draft_timestamp,
};
