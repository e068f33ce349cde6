//! Process configuration
//!
//! Read once at startup. A missing weather credential is not an error: the
//! weather endpoint degrades to its mock advisory instead.

use std::time::Duration;

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_PORT: u16 = 5000;

/// Settings for the outbound weather provider
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// `None` when `OPENWEATHER_KEY` is unset or empty
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_WEATHER_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_WEATHER_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub weather: WeatherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENWEATHER_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let endpoint = lookup("WEATHER_API_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WEATHER_API_URL.to_string());

        let timeout_secs = lookup("WEATHER_TIMEOUT_SECS")
            .and_then(|t| t.trim().parse::<u64>().ok())
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_WEATHER_TIMEOUT_SECS);

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            weather: WeatherConfig {
                api_key,
                endpoint,
                timeout: Duration::from_secs(timeout_secs),
            },
        }
    }
}
