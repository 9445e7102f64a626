//! Observation store client using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::COOKIE;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    AppError, CreatedObservation, ROLE_ATTRIBUTE, StoreConfig, WeatherObservation,
};
use crate::ports::ObservationStore;

/// HTTP client for the observation store. Requests are never retried.
#[derive(Debug, Clone)]
pub struct HttpObservationStore {
    base_url: Url,
    role: Option<String>,
    client: Client,
}

impl HttpObservationStore {
    /// Create a client for the configured store.
    pub fn new(config: &StoreConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url: config.base_url.clone(), role: None, client })
    }

    /// Forward the session role to the store as a cookie.
    pub fn with_role(mut self, role: Option<String>) -> Self {
        self.role = role;
        self
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Configuration(format!("Store URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let request = match &self.role {
            Some(role) => request.header(COOKIE, format!("{}={}", ROLE_ATTRIBUTE, role)),
            None => request,
        };
        let response = request.send().map_err(|e| {
            warn!(error = %e, "store request failed");
            AppError::Transport(e.to_string())
        })?;
        debug!(status = response.status().as_u16(), url = %response.url(), "store responded");
        Ok(response)
    }

    fn ensure_success(response: Response) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
        warn!(status = status.as_u16(), "store rejected request");
        Err(AppError::HttpStatus { status: status.as_u16(), body: body.trim().to_string() })
    }
}

impl ObservationStore for HttpObservationStore {
    fn list(&self) -> Result<Vec<WeatherObservation>, AppError> {
        let url = self.endpoint(&["weathers"])?;
        let response = Self::ensure_success(self.send(self.client.get(url))?)?;
        response.json().map_err(|e| AppError::ParseError {
            what: "observation list".to_string(),
            details: e.to_string(),
        })
    }

    fn get(&self, id: i64) -> Result<WeatherObservation, AppError> {
        let url = self.endpoint(&["weather", &id.to_string()])?;
        let response = self.send(self.client.get(url))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::ObservationNotFound(id));
        }
        let response = Self::ensure_success(response)?;
        response.json().map_err(|e| AppError::ParseError {
            what: format!("observation {}", id),
            details: e.to_string(),
        })
    }

    fn create(&self, payload: &WeatherObservation) -> Result<Option<i64>, AppError> {
        let url = self.endpoint(&["weather"])?;
        let response = Self::ensure_success(self.send(self.client.post(url).json(payload))?)?;
        // Any 2xx is an acknowledgment; the id is informational.
        let body = response.text().unwrap_or_default();
        Ok(serde_json::from_str::<CreatedObservation>(&body).ok().map(|created| created.id))
    }

    fn update(&self, id: i64, payload: &WeatherObservation) -> Result<(), AppError> {
        let url = self.endpoint(&["weather", &id.to_string()])?;
        Self::ensure_success(self.send(self.client.put(url).json(payload))?)?;
        Ok(())
    }
}
