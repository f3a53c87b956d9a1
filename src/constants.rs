/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-widget/0.1.0";

/// OpenWeatherMap API base URL
pub const OPEN_WEATHER_API_BASE: &str = "https://api.openweathermap.org";

/// Direct geocoding endpoint (city name to coordinates)
pub const GEOCODING_PATH: &str = "/geo/1.0/direct";

/// 5 day / 3 hour forecast endpoint
pub const FORECAST_PATH: &str = "/data/2.5/forecast";

/// Unit system requested from the forecast endpoint
pub const UNITS: &str = "metric";

/// Environment variable holding the OpenWeatherMap API key
pub const API_KEY_ENV: &str = "OPEN_WEATHER_API_KEY";

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "OPEN_WEATHER_API_BASE";

/// Environment variable holding an optional request timeout in seconds
pub const TIMEOUT_ENV: &str = "OPEN_WEATHER_TIMEOUT_SECS";

/// Inline message shown when the city field is left empty
pub const CITY_REQUIRED_MESSAGE: &str = "You must add a city first";
