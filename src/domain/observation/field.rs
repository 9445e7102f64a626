use std::fmt;

/// The editable attributes of an observation draft.
///
/// Declaration order is form order, which is also the order validation
/// errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Timestamp,
    Temperature,
    Humidity,
    Pressure,
    WindSpeed,
    City,
    Country,
    WeatherStatus,
}

impl DraftField {
    /// All editable fields in form order.
    pub const ALL: [DraftField; 8] = [
        DraftField::Timestamp,
        DraftField::Temperature,
        DraftField::Humidity,
        DraftField::Pressure,
        DraftField::WindSpeed,
        DraftField::City,
        DraftField::Country,
        DraftField::WeatherStatus,
    ];

    /// Input name used by the editing form (camelCase).
    pub fn form_name(&self) -> &'static str {
        match self {
            DraftField::Timestamp => "timestamp",
            DraftField::Temperature => "temperature",
            DraftField::Humidity => "humidity",
            DraftField::Pressure => "pressure",
            DraftField::WindSpeed => "windSpeed",
            DraftField::City => "city",
            DraftField::Country => "country",
            DraftField::WeatherStatus => "weatherStatus",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Timestamp => "Date",
            DraftField::Temperature => "Temperature (°C)",
            DraftField::Humidity => "Humidity (%)",
            DraftField::Pressure => "Pressure (hPa)",
            DraftField::WindSpeed => "Wind Speed (m/s)",
            DraftField::City => "City",
            DraftField::Country => "Country",
            DraftField::WeatherStatus => "Weather Status",
        }
    }

    /// Resolve a form input name. Unknown names (including `id`) resolve to `None`.
    pub fn from_form_name(name: &str) -> Option<DraftField> {
        DraftField::ALL.into_iter().find(|field| field.form_name() == name)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}
