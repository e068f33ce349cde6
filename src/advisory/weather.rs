use serde::Serialize;

/// Outcome of one weather lookup.
///
/// `Absent` covers a missing credential and every kind of call failure alike;
/// callers cannot tell them apart.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherSnapshot {
    Present { description: String, temperature_c: f64 },
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherAdvisory {
    pub short: String,
    pub detail: String,
}

/// Turn a weather snapshot into farm guidance, falling back to a fixed
/// mock advisory when no live data is available.
pub fn weather_advisory(snapshot: &WeatherSnapshot) -> WeatherAdvisory {
    match snapshot {
        WeatherSnapshot::Present {
            description,
            temperature_c,
        } => WeatherAdvisory {
            short: format!("Current weather: {}, {}°C", description, temperature_c),
            detail: "Based on current data, schedule spraying during low wind hours.".to_string(),
        },
        WeatherSnapshot::Absent => WeatherAdvisory {
            short: "Mock: Light rain expected".to_string(),
            detail: "Delay fertilizer application for 48 hours.".to_string(),
        },
    }
}
