//! Static agronomic knowledge base
//!
//! Crop profiles and pest-warning rules consulted by every advisory.
//! Built once at startup and shared read-only (`Arc<KnowledgeBase>`) across
//! request handlers; nothing here exposes mutation.

use serde::Serialize;

/// Indian cropping season a crop is sown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Winter crop, sown Oct-Nov
    Rabi,
    /// Monsoon crop, sown Jun-Jul
    Kharif,
}

/// Agronomic requirements for a single crop.
#[derive(Debug, Clone, PartialEq)]
pub struct CropProfile {
    pub name: String,
    pub ph_min: f64,
    pub ph_max: f64,
    pub rainfall_min_mm: f64,
    pub season: Season,
}

impl CropProfile {
    fn new(name: &str, ph_min: f64, ph_max: f64, rainfall_min_mm: f64, season: Season) -> Self {
        Self {
            name: name.to_string(),
            ph_min,
            ph_max,
            rainfall_min_mm,
            season,
        }
    }

    /// Inclusive on both bounds.
    pub fn ph_in_range(&self, soil_ph: f64) -> bool {
        self.ph_min <= soil_ph && soil_ph <= self.ph_max
    }

    pub fn rainfall_sufficient(&self, avg_rainfall_mm: f64) -> bool {
        avg_rainfall_mm >= self.rainfall_min_mm
    }
}

/// A pest alert and the crops it applies to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PestWarningRule {
    pub name: String,
    pub crops: Vec<String>,
    pub message: String,
}

impl PestWarningRule {
    fn new(name: &str, crops: &[&str], message: &str) -> Self {
        Self {
            name: name.to_string(),
            crops: crops.iter().map(|c| c.to_string()).collect(),
            message: message.to_string(),
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn affects(&self, crop: &str) -> bool {
        self.crops.iter().any(|c| c == crop)
    }
}

/// Read-only crop and pest tables.
///
/// Both tables keep insertion order: crop suggestions break score ties by it
/// and pest warnings are returned in it.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    crops: Vec<CropProfile>,
    pests: Vec<PestWarningRule>,
}

impl KnowledgeBase {
    /// The built-in tables for the Sangli / western Maharashtra region.
    pub fn builtin() -> Self {
        let crops = vec![
            CropProfile::new("wheat", 6.0, 7.5, 300.0, Season::Rabi),
            CropProfile::new("maize", 5.5, 7.0, 500.0, Season::Kharif),
            CropProfile::new("groundnut", 5.0, 6.5, 400.0, Season::Kharif),
            CropProfile::new("soybean", 5.5, 7.0, 450.0, Season::Kharif),
        ];

        let pests = vec![
            PestWarningRule::new(
                "stem_borer",
                &["maize"],
                "Stem borer alert — apply pheromone traps early.",
            ),
            PestWarningRule::new(
                "aphids",
                &["soybean", "groundnut"],
                "Aphid activity expected, neem spray recommended.",
            ),
        ];

        Self::from_tables(crops, pests)
    }

    /// Build from caller-supplied tables. Later duplicates of a crop name are dropped
    /// so that names stay a unique key.
    pub fn from_tables(crops: Vec<CropProfile>, pests: Vec<PestWarningRule>) -> Self {
        let mut unique: Vec<CropProfile> = Vec::with_capacity(crops.len());
        for crop in crops {
            if unique.iter().any(|c| c.name == crop.name) {
                tracing::warn!("Duplicate crop profile '{}' ignored", crop.name);
                continue;
            }
            unique.push(crop);
        }

        Self { crops: unique, pests }
    }

    /// All crop profiles, in insertion order.
    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    /// All pest rules, in insertion order.
    pub fn pest_rules(&self) -> &[PestWarningRule] {
        &self.pests
    }

    /// Exact, case-sensitive lookup.
    pub fn crop(&self, name: &str) -> Option<&CropProfile> {
        self.crops.iter().find(|c| c.name == name)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
