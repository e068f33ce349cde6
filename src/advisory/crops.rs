use serde::Serialize;

use crate::knowledge_base::{KnowledgeBase, Season};

/// One scored crop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropRecommendation {
    pub crop: String,
    /// Satisfied conditions out of two (pH in range, rainfall sufficient)
    pub score: u8,
    pub reason: String,
    /// Kept off the wire; responses carry only crop, score and reason
    #[serde(skip)]
    pub season: Season,
}

/// Score every crop against the soil pH and average rainfall.
///
/// All crops are returned, best first. `sort_by` is stable, so equal scores
/// keep knowledge-base order.
pub fn recommend_crops(kb: &KnowledgeBase, soil_ph: f64, avg_rainfall_mm: f64) -> Vec<CropRecommendation> {
    let mut scored: Vec<CropRecommendation> = kb
        .crops()
        .iter()
        .map(|profile| {
            let score = u8::from(profile.ph_in_range(soil_ph))
                + u8::from(profile.rainfall_sufficient(avg_rainfall_mm));

            CropRecommendation {
                crop: profile.name.clone(),
                score,
                reason: format!(
                    "ph={:?}-{:?} rainfall(min)={}",
                    profile.ph_min, profile.ph_max, profile.rainfall_min_mm
                ),
                season: profile.season,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
