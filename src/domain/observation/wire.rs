//! Wire representation exchanged with the observation store.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One weather observation as the store sends and accepts it.
///
/// Field names follow the store's snake_case JSON. NaN measurements
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub timestamp: DateTime<Utc>,
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub weather_status: String,
}

/// Acknowledgment body of a successful create.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedObservation {
    pub id: i64,
}

/// Expand a draft timestamp to a UTC instant.
///
/// Accepts a calendar date (`YYYY-MM-DD`, taken as midnight UTC), a local
/// date-time without offset (`YYYY-MM-DDTHH:MM[:SS]`, taken as UTC) or a full
/// RFC 3339 instant in any offset.
pub fn parse_draft_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Truncate an instant to the calendar date shown in the editable date field.
pub fn calendar_date(instant: &DateTime<Utc>) -> String {
    instant.date_naive().format("%Y-%m-%d").to_string()
}

/// Render an instant the way the store's clients write it.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
