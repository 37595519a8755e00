use std::fmt;

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::InputError;

/// Unit system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Value of the provider's `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial, Units::Standard]
    }

    /// Map a menu selection (`1`, `2` or `3`) to a unit system.
    ///
    /// The answer must match exactly. Returns `None` for anything else so
    /// the caller can decide on the fallback.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Units::Metric),
            "2" => Some(Units::Imperial),
            "3" => Some(Units::Standard),
            _ => None,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reject an empty API key. The key is kept exactly as entered.
pub fn validate_api_key(input: &str) -> Result<String, InputError> {
    if input.is_empty() {
        return Err(InputError::EmptyApiKey);
    }
    Ok(input.to_string())
}

/// Trim a city name and reject it if nothing is left.
pub fn validate_city(input: &str) -> Result<String, InputError> {
    let city = input.trim();
    if city.is_empty() {
        return Err(InputError::EmptyCity);
    }
    Ok(city.to_string())
}

/// One request for current conditions. Both strings are non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
    units: Units,
    api_key: String,
}

impl WeatherQuery {
    pub fn new(api_key: &str, city: &str, units: Units) -> Result<Self, InputError> {
        Ok(Self {
            api_key: validate_api_key(api_key)?,
            city: validate_city(city)?,
            units,
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherQuery")
            .field("city", &self.city)
            .field("units", &self.units)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Provider response body, kept as the JSON it arrived as.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct WeatherPayload(Value);

impl WeatherPayload {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Location name reported by the provider, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }
}

impl From<Value> for WeatherPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The fields of a payload that make up a report.
///
/// Temperatures, pressure and wind speed stay as the provider wrote them, so
/// `15` and `15.0` render differently.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub location_name: String,
    pub temperature: Number,
    pub feels_like: Number,
    pub condition: String,
    pub humidity_pct: u8,
    pub pressure_hpa: Number,
    pub visibility_m: Option<f64>,
    pub wind_speed_mps: Number,
}

impl CurrentConditions {
    /// Extract the report fields, failing if any required one is missing or
    /// has the wrong type, or if the `weather` array is empty.
    pub fn from_payload(payload: &WeatherPayload) -> Result<Self, serde_json::Error> {
        let parsed = OwCurrentResponse::deserialize(payload.as_value())?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| {
                <serde_json::Error as serde::de::Error>::custom("`weather` array is empty")
            })?;

        Ok(Self {
            location_name: parsed.name,
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            condition,
            humidity_pct: parsed.main.humidity,
            pressure_hpa: parsed.main.pressure,
            visibility_m: parsed.visibility,
            wind_speed_mps: parsed.wind.speed,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Number,
    feels_like: Number,
    humidity: u8,
    pressure: Number,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Number,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    visibility: Option<f64>,
}
