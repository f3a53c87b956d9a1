use std::time::Duration;

use anyhow::{Context, Result};

use crate::constants::{API_BASE_ENV, API_KEY_ENV, OPEN_WEATHER_API_BASE, TIMEOUT_ENV};

#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap key sent as `appid`. May be empty; the API rejects it then.
    pub api_key: String,
    /// Base URL the endpoint paths are appended to
    pub api_base: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: OPEN_WEATHER_API_BASE.to_string(),
            timeout: None,
        }
    }

    pub fn with_api_base<S: Into<String>>(mut self, api_base: S) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests need not touch the
    /// process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();
        if api_key.trim().is_empty() {
            tracing::warn!(
                "{} is not set; OpenWeatherMap will reject every request",
                API_KEY_ENV
            );
        }

        let mut config = Self::new(api_key.trim());

        if let Some(base) = lookup(API_BASE_ENV).filter(|b| !b.trim().is_empty()) {
            config = config.with_api_base(base.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|t| !t.trim().is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds, got {:?}", TIMEOUT_ENV, raw))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
