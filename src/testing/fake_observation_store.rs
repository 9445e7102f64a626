use std::sync::{Arc, Mutex};

use crate::domain::{AppError, WeatherObservation};
use crate::ports::ObservationStore;

/// In-memory observation store recording every write.
#[derive(Clone, Default)]
pub struct FakeObservationStore {
    records: Arc<Mutex<Vec<WeatherObservation>>>,
    created: Arc<Mutex<Vec<WeatherObservation>>>,
    updated: Arc<Mutex<Vec<(i64, WeatherObservation)>>>,
    attempts: Arc<Mutex<usize>>,
    fail_writes: bool,
}

impl FakeObservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<WeatherObservation>) -> Self {
        Self { records: Arc::new(Mutex::new(records)), ..Self::default() }
    }

    /// A store whose writes always fail with a transport error.
    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub fn created(&self) -> Vec<WeatherObservation> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<(i64, WeatherObservation)> {
        self.updated.lock().unwrap().clone()
    }

    /// Number of write attempts, successful or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    fn record_attempt(&self) -> Result<(), AppError> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail_writes {
            return Err(AppError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

impl ObservationStore for FakeObservationStore {
    fn list(&self) -> Result<Vec<WeatherObservation>, AppError> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn get(&self, id: i64) -> Result<WeatherObservation, AppError> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.id == Some(id))
            .cloned()
            .ok_or(AppError::ObservationNotFound(id))
    }

    fn create(&self, payload: &WeatherObservation) -> Result<Option<i64>, AppError> {
        self.record_attempt()?;
        let mut created = self.created.lock().unwrap();
        created.push(payload.clone());
        Ok(Some(created.len() as i64))
    }

    fn update(&self, id: i64, payload: &WeatherObservation) -> Result<(), AppError> {
        self.record_attempt()?;
        self.updated.lock().unwrap().push((id, payload.clone()));
        Ok(())
    }
}
