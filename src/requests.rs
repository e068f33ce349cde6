//! Request bodies for the advisory endpoints
//!
//! Every field is optional and lenient: a missing field, a value of the wrong
//! JSON type, a non-numeric string, or a non-finite number all resolve to the
//! field's default. Numeric strings such as `"6.2"` are accepted.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_SOIL_PH: f64 = 6.5;
pub const DEFAULT_AVG_RAINFALL_MM: f64 = 400.0;
pub const DEFAULT_SOIL_CROP: &str = "maize";
pub const DEFAULT_NITROGEN_PPM: f64 = 200.0;
pub const DEFAULT_PHOSPHORUS_PPM: f64 = 20.0;
pub const DEFAULT_POTASSIUM_PPM: f64 = 200.0;
pub const DEFAULT_LOCATION: &str = "Sangli, India";

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

// ============================================================================
// Crop suggestions
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CropSuggestionRequest {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub soil_ph: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_rainfall_mm: Option<f64>,
}

impl CropSuggestionRequest {
    /// `(soil_ph, avg_rainfall_mm)`
    pub fn resolve(&self) -> (f64, f64) {
        (
            self.soil_ph.unwrap_or(DEFAULT_SOIL_PH),
            self.avg_rainfall_mm.unwrap_or(DEFAULT_AVG_RAINFALL_MM),
        )
    }
}

// ============================================================================
// Soil analysis
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SoilAnalysisRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub crop: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub nitrogen_ppm: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub phosphorus_ppm: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub potassium_ppm: Option<f64>,
}

/// Soil test with all defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct SoilSample {
    pub crop: String,
    pub nitrogen_ppm: f64,
    pub phosphorus_ppm: f64,
    pub potassium_ppm: f64,
}

impl SoilAnalysisRequest {
    pub fn resolve(self) -> SoilSample {
        SoilSample {
            crop: self.crop.unwrap_or_else(|| DEFAULT_SOIL_CROP.to_string()),
            nitrogen_ppm: self.nitrogen_ppm.unwrap_or(DEFAULT_NITROGEN_PPM),
            phosphorus_ppm: self.phosphorus_ppm.unwrap_or(DEFAULT_PHOSPHORUS_PPM),
            potassium_ppm: self.potassium_ppm.unwrap_or(DEFAULT_POTASSIUM_PPM),
        }
    }
}

// ============================================================================
// Weather advisory
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct WeatherAdvisoryRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
}

impl WeatherAdvisoryRequest {
    pub fn resolve(self) -> String {
        self.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string())
    }
}

// ============================================================================
// Pest warning
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PestWarningRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub crop: Option<String>,
}

impl PestWarningRequest {
    /// Lowercased crop name; empty when omitted
    pub fn resolve(self) -> String {
        self.crop.unwrap_or_default().to_lowercase()
    }
}

// ============================================================================
// Chatbot
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ChatbotRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

impl ChatbotRequest {
    pub fn resolve(self) -> String {
        self.message.unwrap_or_default()
    }
}
