use serde::Serialize;

/// Minimum available nitrogen (ppm) before urea is advised
pub const NITROGEN_MIN_PPM: f64 = 200.0;
/// Minimum available phosphorus (ppm) before SSP is advised
pub const PHOSPHORUS_MIN_PPM: f64 = 15.0;
/// Minimum available potassium (ppm) before MOP is advised
pub const POTASSIUM_MIN_PPM: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Nutrient {
    #[serde(rename = "N")]
    Nitrogen,
    #[serde(rename = "P")]
    Phosphorus,
    #[serde(rename = "K")]
    Potassium,
    /// No deficiency found
    #[serde(rename = "OK")]
    Adequate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FertilizerSuggestion {
    pub nutrient: Nutrient,
    pub suggestion: String,
}

impl FertilizerSuggestion {
    fn new(nutrient: Nutrient, suggestion: &str) -> Self {
        Self {
            nutrient,
            suggestion: suggestion.to_string(),
        }
    }
}

/// Fertilizer actions for an N/P/K soil test, in N, P, K order.
///
/// Yields exactly one `Adequate` record when no nutrient is below its threshold.
/// The crop name does not change the result yet; thresholds are crop-independent.
pub fn fertilizer_suggestion(
    _crop: &str,
    nitrogen_ppm: f64,
    phosphorus_ppm: f64,
    potassium_ppm: f64,
) -> Vec<FertilizerSuggestion> {
    let mut suggestions = Vec::new();

    if nitrogen_ppm < NITROGEN_MIN_PPM {
        suggestions.push(FertilizerSuggestion::new(Nutrient::Nitrogen, "Apply Urea 50 kg/ha"));
    }
    if phosphorus_ppm < PHOSPHORUS_MIN_PPM {
        suggestions.push(FertilizerSuggestion::new(Nutrient::Phosphorus, "Apply SSP 100 kg/ha"));
    }
    if potassium_ppm < POTASSIUM_MIN_PPM {
        suggestions.push(FertilizerSuggestion::new(Nutrient::Potassium, "Apply MOP 50 kg/ha"));
    }

    if suggestions.is_empty() {
        suggestions.push(FertilizerSuggestion::new(Nutrient::Adequate, "Soil nutrients adequate"));
    }

    suggestions
}
