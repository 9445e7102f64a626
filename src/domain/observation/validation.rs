//! Field-level validation of observation drafts.
//!
//! Empty or non-numeric measurements fail their bounds rule: a missing value
//! is never treated as being within bounds.

use std::collections::BTreeMap;

use super::draft::{ObservationDraft, parse_measurement};
use super::field::DraftField;
use super::wire::parse_draft_timestamp;

/// Per-field validation messages. Empty means the draft can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<DraftField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message attached to a field, if any.
    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: DraftField, message: &str) {
        self.errors.entry(field).or_insert_with(|| message.to_string());
    }
}

/// Check every rule against the draft and collect all failures.
pub fn validate(draft: &ObservationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.timestamp.trim().is_empty() {
        errors.insert(DraftField::Timestamp, "Date is required");
    } else if parse_draft_timestamp(&draft.timestamp).is_none() {
        errors.insert(DraftField::Timestamp, "Enter a valid date");
    }

    if !parse_measurement(&draft.temperature).is_finite() {
        errors.insert(DraftField::Temperature, "Enter a valid temperature");
    }
    if !within(&draft.humidity, 0.0, 100.0) {
        errors.insert(DraftField::Humidity, "Enter a valid humidity");
    }
    if !within(&draft.pressure, 0.0, f64::INFINITY) {
        errors.insert(DraftField::Pressure, "Enter a valid pressure");
    }
    if !within(&draft.wind_speed, 0.0, f64::INFINITY) {
        errors.insert(DraftField::WindSpeed, "Enter a valid wind speed");
    }

    if draft.weather_status.trim().is_empty() {
        errors.insert(DraftField::WeatherStatus, "Weather status is required");
    }
    if draft.city.trim().is_empty() {
        errors.insert(DraftField::City, "City is required");
    }
    if draft.country.trim().is_empty() {
        errors.insert(DraftField::Country, "Country is required");
    }

    errors
}

// NaN fails every comparison, so unparseable input lands outside the range.
fn within(raw: &str, min: f64, max: f64) -> bool {
    let value = parse_measurement(raw);
    value >= min && value <= max && !value.is_infinite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn oslo() -> ObservationDraft {
        ObservationDraft {
            id: None,
            city: "Oslo".into(),
            country: "Norway".into(),
            timestamp: "2024-05-01".into(),
            temperature: "20".into(),
            humidity: "60".into(),
            pressure: "1000".into(),
            wind_speed: "5".into(),
            weather_status: "Clear".into(),
        }
    }

    #[test]
    fn complete_draft_has_no_errors() {
        assert!(validate(&oslo()).is_empty());
    }

    #[test]
    fn out_of_range_humidity_is_the_only_error() {
        let mut draft = oslo();
        draft.humidity = "150".into();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(DraftField::Humidity), Some("Enter a valid humidity"));
    }

    #[test]
    fn every_rule_is_reported() {
        let draft = ObservationDraft {
            id: None,
            city: String::new(),
            country: "  ".into(),
            timestamp: String::new(),
            temperature: "warm".into(),
            humidity: "-1".into(),
            pressure: "-0.5".into(),
            wind_speed: "-3".into(),
            weather_status: String::new(),
        };
        let errors = validate(&draft);
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, DraftField::ALL.to_vec());
        assert_eq!(errors.get(DraftField::Timestamp), Some("Date is required"));
        assert_eq!(errors.get(DraftField::Pressure), Some("Enter a valid pressure"));
        assert_eq!(errors.get(DraftField::WindSpeed), Some("Enter a valid wind speed"));
        assert_eq!(errors.get(DraftField::WeatherStatus), Some("Weather status is required"));
        assert_eq!(errors.get(DraftField::City), Some("City is required"));
        assert_eq!(errors.get(DraftField::Country), Some("Country is required"));
    }

    #[test]
    fn empty_measurements_are_missing_not_in_bounds() {
        let mut draft = oslo();
        draft.humidity = String::new();
        draft.pressure = " ".into();
        draft.wind_speed = "fast".into();
        let errors = validate(&draft);
        assert!(errors.contains(DraftField::Humidity));
        assert!(errors.contains(DraftField::Pressure));
        assert!(errors.contains(DraftField::WindSpeed));
    }

    #[test]
    fn unparseable_date_is_reported() {
        let mut draft = oslo();
        draft.timestamp = "01/05/2024".into();
        assert_eq!(validate(&draft).get(DraftField::Timestamp), Some("Enter a valid date"));
    }

    #[test]
    fn local_date_time_is_accepted() {
        let mut draft = oslo();
        draft.timestamp = "2024-05-01T10:00".into();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn boundaries_are_inclusive() {
        let mut draft = oslo();
        draft.humidity = "0".into();
        draft.pressure = "0".into();
        draft.wind_speed = "0".into();
        assert!(validate(&draft).is_empty());
        draft.humidity = "100".into();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn infinite_values_are_rejected() {
        let mut draft = oslo();
        draft.pressure = "inf".into();
        draft.temperature = "-inf".into();
        let errors = validate(&draft);
        assert!(errors.contains(DraftField::Pressure));
        assert!(errors.contains(DraftField::Temperature));
    }

    fn out_of_range_humidity() -> impl Strategy<Value = f64> {
        prop_oneof![-1.0e6..-1.0e-6_f64, 100.000_001..1.0e6_f64]
    }

    proptest! {
        #[test]
        fn humidity_outside_range_always_fails(humidity in out_of_range_humidity()) {
            let mut draft = oslo();
            draft.humidity = humidity.to_string();
            let errors = validate(&draft);
            prop_assert_eq!(errors.get(DraftField::Humidity), Some("Enter a valid humidity"));
        }

        #[test]
        fn in_bounds_drafts_always_pass(
            temperature in -90.0..60.0_f64,
            humidity in 0.0..=100.0_f64,
            pressure in 0.0..1.2e3_f64,
            wind_speed in 0.0..120.0_f64,
        ) {
            let mut draft = oslo();
            draft.temperature = temperature.to_string();
            draft.humidity = humidity.to_string();
            draft.pressure = pressure.to_string();
            draft.wind_speed = wind_speed.to_string();
            prop_assert!(validate(&draft).is_empty());
        }
    }
}
