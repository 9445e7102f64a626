use chrono::{DateTime, Utc};

use super::field::DraftField;
use super::wire::{WeatherObservation, calendar_date, format_instant, parse_draft_timestamp};
use crate::domain::AppError;

/// An observation while it is being composed or edited.
///
/// Every value is kept as the text the user typed; conversion to the wire
/// representation happens only in [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObservationDraft {
    /// Present only when editing a stored record.
    pub id: Option<i64>,
    pub city: String,
    pub country: String,
    pub timestamp: String,
    pub temperature: String,
    pub humidity: String,
    pub pressure: String,
    pub wind_speed: String,
    pub weather_status: String,
}

impl ObservationDraft {
    /// Blank draft for the create flow: measurements at `0`, timestamp at `now`.
    pub fn template(now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            city: String::new(),
            country: String::new(),
            timestamp: format_instant(&now),
            temperature: "0".to_string(),
            humidity: "0".to_string(),
            pressure: "0".to_string(),
            wind_speed: "0".to_string(),
            weather_status: String::new(),
        }
    }

    /// Seed a draft from a fetched record for the edit flow.
    pub fn from_record(record: &WeatherObservation) -> Self {
        Self {
            id: record.id,
            city: record.city.clone(),
            country: record.country.clone(),
            timestamp: calendar_date(&record.timestamp),
            temperature: record.temperature.to_string(),
            humidity: record.humidity.to_string(),
            pressure: record.pressure.to_string(),
            wind_speed: record.wind_speed.to_string(),
            weather_status: record.weather_status.clone(),
        }
    }

    /// Current text of a field.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Timestamp => &self.timestamp,
            DraftField::Temperature => &self.temperature,
            DraftField::Humidity => &self.humidity,
            DraftField::Pressure => &self.pressure,
            DraftField::WindSpeed => &self.wind_speed,
            DraftField::City => &self.city,
            DraftField::Country => &self.country,
            DraftField::WeatherStatus => &self.weather_status,
        }
    }

    /// Replace a field's text.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Timestamp => &mut self.timestamp,
            DraftField::Temperature => &mut self.temperature,
            DraftField::Humidity => &mut self.humidity,
            DraftField::Pressure => &mut self.pressure,
            DraftField::WindSpeed => &mut self.wind_speed,
            DraftField::City => &mut self.city,
            DraftField::Country => &mut self.country,
            DraftField::WeatherStatus => &mut self.weather_status,
        };
        *slot = value.into();
    }

    /// Apply a raw form input. Unrecognized input names are ignored.
    ///
    /// Returns whether the draft changed.
    pub fn update(&mut self, name: &str, raw: impl Into<String>) -> bool {
        match DraftField::from_form_name(name) {
            Some(field) => {
                self.set(field, raw);
                true
            }
            None => false,
        }
    }
}

/// Convert a draft into the store's wire payload.
///
/// Measurements that do not parse become NaN; callers are expected to have
/// validated the draft first. The timestamp must expand to an instant.
pub fn normalize(draft: &ObservationDraft) -> Result<WeatherObservation, AppError> {
    let timestamp = parse_draft_timestamp(&draft.timestamp)
        .ok_or_else(|| AppError::InvalidTimestamp(draft.timestamp.clone()))?;

    Ok(WeatherObservation {
        id: draft.id,
        timestamp,
        city: draft.city.clone(),
        country: draft.country.clone(),
        temperature: parse_measurement(&draft.temperature),
        humidity: parse_measurement(&draft.humidity),
        pressure: parse_measurement(&draft.pressure),
        wind_speed: parse_measurement(&draft.wind_speed),
        weather_status: draft.weather_status.clone(),
    })
}

/// Parse a measurement typed as text. Anything that is not a number is NaN.
pub fn parse_measurement(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
