//! OpenWeatherMap current-conditions client
//!
//! One bounded GET per call, no retry. Every failure is logged and reported
//! as `WeatherSnapshot::Absent`; `WeatherError` never leaves this module's
//! public surface.
//!
//! API documentation: https://openweathermap.org/current

use serde::Deserialize;
use thiserror::Error;

use crate::advisory::WeatherSnapshot;
use crate::config::WeatherConfig;

// ============================================================================
// Provider Response Structures
// ============================================================================

/// Subset of the `/data/2.5/weather` response we read
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    weather: Vec<WeatherCondition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,  // Celsius with units=metric
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned HTTP {0}")]
    Status(u16),

    #[error("weather response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather response had no conditions")]
    NoConditions,
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl WeatherClient {
    /// Build a client whose every request is bounded by `config.timeout`.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Current conditions for `location`, or `Absent` on any failure.
    ///
    /// Without a credential no request is made.
    pub async fn current(&self, location: &str) -> WeatherSnapshot {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("No weather API key configured, using mock advisory");
            return WeatherSnapshot::Absent;
        };

        match self.fetch(location, api_key).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Weather lookup for '{}' failed: {}", location, e);
                WeatherSnapshot::Absent
            }
        }
    }

    async fn fetch(&self, location: &str, api_key: &str) -> Result<WeatherSnapshot, WeatherError> {
        tracing::debug!("Requesting current weather for '{}'", location);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", location), ("appid", api_key), ("units", "metric")])
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: CurrentWeatherResponse = serde_json::from_slice(&body)?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::NoConditions)?;

        Ok(WeatherSnapshot::Present {
            description: condition.description,
            temperature_c: parsed.main.temp,
        })
    }
}
