//! Advisory functions
//!
//! Pure functions over the knowledge base and request inputs. No I/O:
//! the weather advisory only shapes an already-fetched `WeatherSnapshot`.

pub mod chatbot;
pub mod crops;
pub mod fertilizer;
pub mod pests;
pub mod weather;

pub use chatbot::chatbot_reply;
pub use crops::{recommend_crops, CropRecommendation};
pub use fertilizer::{fertilizer_suggestion, FertilizerSuggestion, Nutrient};
pub use pests::pest_risk_for_crop;
pub use weather::{weather_advisory, WeatherAdvisory, WeatherSnapshot};
