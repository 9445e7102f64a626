//! Remote observation store port.

use crate::domain::{AppError, WeatherObservation};

/// Port for the HTTP store that owns observation records.
///
/// Any 2xx answer to a write is an acknowledgment; everything else is an error.
pub trait ObservationStore {
    /// All stored observations, in the store's order.
    fn list(&self) -> Result<Vec<WeatherObservation>, AppError>;

    /// One observation by id.
    fn get(&self, id: i64) -> Result<WeatherObservation, AppError>;

    /// Create an observation. Returns the new id when the store reports one.
    fn create(&self, payload: &WeatherObservation) -> Result<Option<i64>, AppError>;

    /// Replace the observation stored under `id`.
    fn update(&self, id: i64, payload: &WeatherObservation) -> Result<(), AppError>;
}
