use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// OpenWeatherMap Geocoding API Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub country: Option<String>,
    pub state: Option<String>,
}

// ============================================================================
// OpenWeatherMap Forecast API Models
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ForecastResponse {
    pub list: Option<Vec<ForecastSample>>,
}

/// One entry of the forecast time series. Every field is optional so that a
/// partial sample still projects into a record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastSample {
    pub dt: Option<i64>,
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Option<Wind>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainReadings {
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Condition {
    pub icon: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}

// ============================================================================
// Display Models
// ============================================================================

/// A city name that passed validation. Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery {
    pub city: String,
}

/// What one weather card shows for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub city_name: String,
    pub time: Option<i64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub weather_icon: Option<String>,
    pub weather_desc: Option<String>,
    pub humidity: Option<f64>,
    #[serde(rename = "wind_speed")]
    pub wind_speed: Option<f64>,
}

impl DisplayRecord {
    /// Projects a resolved location and its first forecast sample into a
    /// record. Missing nested fields become `None`.
    pub fn project(location: &GeoLocation, sample: &ForecastSample) -> Self {
        let main = sample.main.as_ref();
        let condition = sample.weather.first();

        Self {
            city_name: location.name.clone(),
            time: sample.dt,
            temp_min: main.and_then(|m| m.temp_min),
            temp_max: main.and_then(|m| m.temp_max),
            weather_icon: condition.and_then(|c| c.icon.clone()),
            weather_desc: condition.and_then(|c| c.description.clone()),
            humidity: main.and_then(|m| m.humidity),
            wind_speed: sample.wind.as_ref().and_then(|w| w.speed),
        }
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CheckWeatherRequest {
    /// Name of the city to look up, e.g. "Paris" or "Buenos Aires"
    pub city: String,
}
