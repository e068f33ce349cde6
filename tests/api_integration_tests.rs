// API Integration Tests
//
// Purpose: Drive every endpoint through the Axum router
// Run with: cargo test --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use agri_advisor::{create_router, AppState, Config, WeatherConfig};
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use httpmock::prelude::*;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt; // for oneshot

    // Helper: app in mock-weather mode (no credential)
    fn create_test_app() -> axum::Router {
        let state = AppState::new(&Config::default()).expect("state builds");
        create_router(state)
    }

    fn create_app_with_weather(endpoint: String, api_key: Option<&str>) -> axum::Router {
        let config = Config {
            weather: WeatherConfig {
                api_key: api_key.map(str::to_string),
                endpoint,
                timeout: Duration::from_secs(8),
            },
            ..Config::default()
        };
        create_router(AppState::new(&config).expect("state builds"))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    async fn call(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        (status, json_response(response).await)
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = call(create_test_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Crop Suggestions
    // =========================================================================

    #[tokio::test]
    async fn test_crop_suggestions_ranked() {
        let (status, body) = call(
            create_test_app(),
            post_json("/api/crop_suggestions", json!({"soil_ph": 6.2, "avg_rainfall_mm": 350})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);

        let ranked: Vec<(String, u64)> = body["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| (s["crop"].as_str().unwrap().to_string(), s["score"].as_u64().unwrap()))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("wheat".to_string(), 2),
                ("maize".to_string(), 1),
                ("groundnut".to_string(), 1),
                ("soybean".to_string(), 1),
            ]
        );

        let first = &body["suggestions"][0];
        assert_eq!(first["reason"], "ph=6.0-7.5 rainfall(min)=300");
        assert!(first.get("season").is_none());
    }

    #[tokio::test]
    async fn test_crop_suggestions_defaults() {
        let (status, body) = call(create_test_app(), post_json("/api/crop_suggestions", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        let crops: Vec<&str> = body["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["crop"].as_str().unwrap())
            .collect();
        // pH 6.5 / 400 mm: wheat and groundnut satisfy both conditions
        assert_eq!(crops, vec!["wheat", "groundnut", "maize", "soybean"]);
    }

    #[tokio::test]
    async fn test_crop_suggestions_without_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/crop_suggestions")
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(create_test_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_crop_suggestions_malformed_field_defaults() {
        let (_, malformed) = call(
            create_test_app(),
            post_json("/api/crop_suggestions", json!({"soil_ph": "very acidic", "avg_rainfall_mm": "400"})),
        )
        .await;
        let (_, defaults) = call(create_test_app(), post_json("/api/crop_suggestions", json!({}))).await;

        assert_eq!(malformed, defaults);
    }

    // =========================================================================
    // Section 3: Soil Analysis
    // =========================================================================

    #[tokio::test]
    async fn test_soil_analysis_low_nitrogen() {
        let (status, body) = call(
            create_test_app(),
            post_json(
                "/api/soil_analysis",
                json!({"crop": "maize", "nitrogen_ppm": 150, "phosphorus_ppm": 20, "potassium_ppm": 200}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "fertilizer_suggestions": [{"nutrient": "N", "suggestion": "Apply Urea 50 kg/ha"}]
            })
        );
    }

    #[tokio::test]
    async fn test_soil_analysis_reads_body_without_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/soil_analysis")
            .body(Body::from(r#"{"nitrogen_ppm":10,"phosphorus_ppm":1,"potassium_ppm":1}"#))
            .unwrap();
        let (status, body) = call(create_test_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        let nutrients: Vec<&str> = body["fertilizer_suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["nutrient"].as_str().unwrap())
            .collect();
        assert_eq!(nutrients, vec!["N", "P", "K"]);
    }

    #[tokio::test]
    async fn test_crop_suggestions_plain_text_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/crop_suggestions")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"soil_ph": 9.5, "avg_rainfall_mm": 10}"#))
            .unwrap();
        let (status, body) = call(create_test_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["suggestions"]
            .as_array()
            .unwrap()
            .iter()
            .all(|s| s["score"] == 0));
    }

    #[tokio::test]
    async fn test_soil_analysis_defaults_adequate() {
        let (_, body) = call(create_test_app(), post_json("/api/soil_analysis", json!({}))).await;

        assert_eq!(
            body["fertilizer_suggestions"],
            json!([{"nutrient": "OK", "suggestion": "Soil nutrients adequate"}])
        );
    }

    #[tokio::test]
    async fn test_soil_analysis_unknown_crop() {
        let (status, body) = call(
            create_test_app(),
            post_json("/api/soil_analysis", json!({"crop": "dragonfruit", "potassium_ppm": 100})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["fertilizer_suggestions"],
            json!([{"nutrient": "K", "suggestion": "Apply MOP 50 kg/ha"}])
        );
    }

    // =========================================================================
    // Section 4: Pest Warning
    // =========================================================================

    #[tokio::test]
    async fn test_pest_warning_case_insensitive() {
        let (status, body) = call(create_test_app(), post_json("/api/pest_warning", json!({"crop": "MAIZE"}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "warnings": [{
                    "name": "stem_borer",
                    "crops": ["maize"],
                    "message": "Stem borer alert — apply pheromone traps early."
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_pest_warning_empty_cases() {
        let (_, wheat) = call(create_test_app(), post_json("/api/pest_warning", json!({"crop": "wheat"}))).await;
        assert_eq!(wheat, json!({"ok": true, "warnings": []}));

        let (_, missing) = call(create_test_app(), post_json("/api/pest_warning", json!({}))).await;
        assert_eq!(missing, json!({"ok": true, "warnings": []}));
    }

    // =========================================================================
    // Section 5: Weather Advisory
    // =========================================================================

    #[tokio::test]
    async fn test_weather_advisory_mock_mode() {
        let (status, body) = call(
            create_test_app(),
            post_json("/api/weather_advisory", json!({"location": "Pune, India"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "advisory": {
                    "short": "Mock: Light rain expected",
                    "detail": "Delay fertilizer application for 48 hours."
                }
            })
        );
    }

    #[tokio::test]
    async fn test_weather_advisory_live_uses_default_location() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/data/2.5/weather")
                    .query_param("q", "Sangli, India")
                    .query_param("units", "metric");
                then.status(200).json_body(json!({
                    "weather": [{"description": "haze"}],
                    "main": {"temp": 31.5}
                }));
            })
            .await;

        let app = create_app_with_weather(server.url("/data/2.5/weather"), Some("test-key"));
        let (status, body) = call(app, post_json("/api/weather_advisory", json!({}))).await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["advisory"]["short"], "Current weather: haze, 31.5°C");
        assert_eq!(
            body["advisory"]["detail"],
            "Based on current data, schedule spraying during low wind hours."
        );
    }

    #[tokio::test]
    async fn test_weather_advisory_provider_failure_matches_mock_mode() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/data/2.5/weather");
                then.status(500);
            })
            .await;

        let failing = create_app_with_weather(server.url("/data/2.5/weather"), Some("test-key"));
        let (status, from_failure) = call(failing, post_json("/api/weather_advisory", json!({}))).await;
        let (_, from_mock_mode) = call(create_test_app(), post_json("/api/weather_advisory", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(from_failure, from_mock_mode);
    }

    // =========================================================================
    // Section 6: Chatbot
    // =========================================================================

    #[tokio::test]
    async fn test_chatbot_replies() {
        let (status, body) = call(
            create_test_app(),
            post_json("/api/chatbot", json!({"message": "Which Crop suits my farm?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"reply": "Please share soil pH & rainfall for crop suggestion."}));

        let (_, body) = call(create_test_app(), post_json("/api/chatbot", json!({"message": "hi"}))).await;
        assert_eq!(body, json!({"reply": "I can assist with weather, soil, crop and pest advisories."}));
        assert!(body.get("ok").is_none());
    }

    // =========================================================================
    // Section 7: Cross-cutting
    // =========================================================================

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/chatbot")
            .header(header::ORIGIN, "http://farm-dashboard.example")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message":"hello"}"#))
            .unwrap();

        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_repeated_requests_identical() {
        let cases = [
            ("/api/crop_suggestions", json!({"soil_ph": 5.7, "avg_rainfall_mm": 480})),
            ("/api/soil_analysis", json!({"crop": "wheat", "nitrogen_ppm": 90, "potassium_ppm": 120})),
            ("/api/pest_warning", json!({"crop": "Groundnut"})),
            ("/api/chatbot", json!({"message": "crop advice please"})),
        ];

        let app = create_test_app();
        for (uri, body) in cases {
            let (_, fresh) = call(create_test_app(), post_json(uri, body.clone())).await;
            let (_, first) = call(app.clone(), post_json(uri, body.clone())).await;
            let (_, second) = call(app.clone(), post_json(uri, body)).await;

            assert_eq!(fresh, first, "{} differs across app instances", uri);
            assert_eq!(first, second, "{} differs on repeat", uri);
        }
    }
}
