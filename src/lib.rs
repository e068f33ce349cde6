//! Agricultural advisory service
//!
//! Crop, fertilizer, pest and weather guidance over a small static
//! knowledge base.
//!
//! - `knowledge_base`: immutable crop profiles and pest-warning rules
//! - `advisory/`: pure advisory functions
//! - `weather_client`: best-effort OpenWeatherMap lookup (feature `api`)
//! - `api_server`: Axum router and handlers (feature `api`)

pub mod advisory;
pub mod knowledge_base;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod config;
#[cfg(feature = "api")]
pub mod requests;
#[cfg(feature = "api")]
pub mod weather_client;

// Re-export commonly used types
pub use advisory::{
    chatbot_reply, fertilizer_suggestion, pest_risk_for_crop, recommend_crops, weather_advisory,
    CropRecommendation, FertilizerSuggestion, Nutrient, WeatherAdvisory, WeatherSnapshot,
};
pub use knowledge_base::{CropProfile, KnowledgeBase, PestWarningRule, Season};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
#[cfg(feature = "api")]
pub use config::{Config, WeatherConfig};
#[cfg(feature = "api")]
pub use weather_client::{WeatherClient, WeatherError};
