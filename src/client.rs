use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::constants::{FORECAST_PATH, GEOCODING_PATH, UNITS, USER_AGENT};
use crate::error::LookupError;
use crate::models::{ForecastResponse, GeoLocation};

/// HTTP client for the OpenWeatherMap geocoding and forecast endpoints
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Arc<Client>,
    api_key: String,
    api_base: String,
}

impl OpenWeatherClient {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: Arc::new(builder.build()?),
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, LookupError> {
        let url = format!("{}{}", self.api_base, path);
        tracing::debug!("GET {} ({})", url, endpoint);

        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::Status {
                endpoint,
                status: response.status(),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Resolves a city name to candidate locations, best match first
    pub async fn geocode(&self, city: &str) -> Result<Vec<GeoLocation>, LookupError> {
        self.make_request(
            "geocoding",
            GEOCODING_PATH,
            &[("q", city.to_string()), ("appid", self.api_key.clone())],
        )
        .await
    }

    /// Fetches the metric forecast time series for a coordinate pair
    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse, LookupError> {
        self.make_request(
            "forecast",
            FORECAST_PATH,
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", UNITS.to_string()),
            ],
        )
        .await
    }
}
