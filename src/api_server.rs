// Axum API Server Module
//
// Five POST advisory endpoints plus a health check. Handlers never fail:
// missing or malformed input resolves to defaults (see `requests`), and the
// weather endpoint falls back to a mock advisory.

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::advisory::{
    chatbot_reply, fertilizer_suggestion, pest_risk_for_crop, recommend_crops, weather_advisory,
};
use crate::config::Config;
use crate::knowledge_base::KnowledgeBase;
use crate::requests::{
    ChatbotRequest, CropSuggestionRequest, PestWarningRequest, SoilAnalysisRequest,
    WeatherAdvisoryRequest,
};
use crate::weather_client::WeatherClient;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub knowledge_base: Arc<KnowledgeBase>,
    pub weather: Arc<WeatherClient>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_knowledge_base(config, KnowledgeBase::builtin())
    }

    pub fn with_knowledge_base(config: &Config, knowledge_base: KnowledgeBase) -> anyhow::Result<Self> {
        tracing::info!(
            "Loaded knowledge base: {} crops, {} pest rules",
            knowledge_base.crops().len(),
            knowledge_base.pest_rules().len()
        );

        let weather = WeatherClient::new(&config.weather)?;
        if weather.has_credential() {
            tracing::info!("Weather API key loaded");
        } else {
            tracing::warn!("No weather API key found, weather advisories will use mock data");
        }

        Ok(Self {
            knowledge_base: Arc::new(knowledge_base),
            weather: Arc::new(weather),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Advisory endpoints (JSON body in, JSON envelope out)
        .route("/api/crop_suggestions", post(crop_suggestions))
        .route("/api/soil_analysis", post(soil_analysis))
        .route("/api/weather_advisory", post(weather_advisory_handler))
        .route("/api/pest_warning", post(pest_warning))
        .route("/api/chatbot", post(chatbot))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive()) // Browser clients from any origin
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

// Parsed regardless of Content-Type. A body that is empty or not a JSON
// object is treated as `{}`.
fn body_or_default<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!("Request body missing or not a JSON object ({}), using defaults", e);
            T::default()
        }
    }
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn crop_suggestions(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<serde_json::Value> {
    let (soil_ph, avg_rainfall_mm) = body_or_default::<CropSuggestionRequest>(&body).resolve();
    tracing::debug!("Crop suggestions for pH {} / {} mm", soil_ph, avg_rainfall_mm);

    let suggestions = recommend_crops(&state.knowledge_base, soil_ph, avg_rainfall_mm);

    Json(json!({
        "ok": true,
        "suggestions": suggestions,
    }))
}

async fn soil_analysis(body: Bytes) -> Json<serde_json::Value> {
    let sample = body_or_default::<SoilAnalysisRequest>(&body).resolve();
    tracing::debug!("Soil analysis: {:?}", sample);

    let suggestions = fertilizer_suggestion(
        &sample.crop,
        sample.nitrogen_ppm,
        sample.phosphorus_ppm,
        sample.potassium_ppm,
    );

    Json(json!({
        "ok": true,
        "fertilizer_suggestions": suggestions,
    }))
}

async fn weather_advisory_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<serde_json::Value> {
    let location = body_or_default::<WeatherAdvisoryRequest>(&body).resolve();

    let snapshot = state.weather.current(&location).await;
    let advisory = weather_advisory(&snapshot);

    Json(json!({
        "ok": true,
        "advisory": advisory,
    }))
}

async fn pest_warning(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<serde_json::Value> {
    let crop = body_or_default::<PestWarningRequest>(&body).resolve();

    let warnings = pest_risk_for_crop(&state.knowledge_base, &crop);
    tracing::debug!("Pest warnings for '{}': {}", crop, warnings.len());

    Json(json!({
        "ok": true,
        "warnings": warnings,
    }))
}

async fn chatbot(body: Bytes) -> Json<serde_json::Value> {
    let message = body_or_default::<ChatbotRequest>(&body).resolve();

    // No "ok" field on this endpoint
    Json(json!({
        "reply": chatbot_reply(&message),
    }))
}
