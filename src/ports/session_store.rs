//! Persisted session attribute port.

use chrono::{DateTime, Utc};

use crate::domain::{AppError, SessionAttribute};

/// Port for client-held session attributes.
///
/// Expiry is checked lazily: an attribute past its deadline reads as absent.
pub trait SessionStore {
    /// Value of a live attribute.
    fn get(&self, name: &str, now: DateTime<Utc>) -> Result<Option<String>, AppError>;

    /// Store an attribute, replacing any previous value under the same name.
    fn set(&self, attribute: SessionAttribute) -> Result<(), AppError>;

    /// Delete an attribute. Removing an absent attribute is not an error.
    fn remove(&self, name: &str) -> Result<(), AppError>;
}
