// API Integration Tests
//
// Purpose: exercise every route of the router against the shipped content
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use std::path::PathBuf;
    use theopedia::{create_router, AppState, SiteConfig};
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app backed by content/
    async fn create_test_app() -> axum::Router {
        let config = SiteConfig {
            content_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content"),
            base_url: "https://theopedia.example".to_string(),
            locales: vec!["en".to_string(), "es".to_string()],
            ..SiteConfig::default()
        };
        let state = AppState::new(config).await.expect("content should load");
        create_router(state)
    }

    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .await
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("body should be UTF-8")
    }

    async fn json_response(response: axum::response::Response) -> Value {
        serde_json::from_str(&body_text(response).await).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Section 1: Health and redirects
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_response(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["pages"], 7);
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_root_redirects_to_default_locale() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/en");
    }

    // =========================================================================
    // Section 2: HTML pages
    // =========================================================================

    #[tokio::test]
    async fn test_topic_page_html() {
        let response = get("/en/religion/christianity/theology").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("<title>Christian Theology | Theopedia</title>"));
        assert!(html.contains("Core Areas of Theology"));
        assert!(html.contains("Eschatology"));
    }

    #[tokio::test]
    async fn test_page_in_second_locale() {
        let response = get("/es/sacred-texts/bible").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("lang=\"es\""));
    }

    #[tokio::test]
    async fn test_home_page_lists_every_group() {
        let response = get("/en").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        for heading in ["Practices", "Religion", "Sacred Texts", "Studies", "Teachings"] {
            assert!(html.contains(heading), "home page missing {}", heading);
        }
    }

    #[tokio::test]
    async fn test_unknown_page_is_404_html() {
        let response = get("/en/religion/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_unsupported_locale_is_404() {
        let response = get("/fr/sacred-texts/bible").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =========================================================================
    // Section 3: JSON / Markdown API
    // =========================================================================

    #[tokio::test]
    async fn test_list_pages() {
        let json = json_response(get("/api/pages").await).await;
        assert_eq!(json["rows"], 7);
        assert_eq!(json["data"][0]["route"], "/practices/meditation");
    }

    #[tokio::test]
    async fn test_page_json_view() {
        let response = get("/api/pages/religion/christianity/theology?locale=es").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_response(response).await;
        assert_eq!(json["locale"], "es");
        assert_eq!(json["hero"]["actions"][0]["href"], "/es/studies/theology");
        assert_eq!(json["hero"]["actions"][1]["href"], "/es/sacred-texts/bible");
        assert_eq!(json["sections"][0]["tabs"][0]["cards"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_unsupported_locale_falls_back_to_default_in_api() {
        let json = json_response(get("/api/pages/studies/theology?locale=fr").await).await;
        assert_eq!(json["locale"], "en");
    }

    #[tokio::test]
    async fn test_page_json_not_found() {
        let response = get("/api/pages/nowhere").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = json_response(response).await;
        assert_eq!(json["error"], "Page /nowhere not found");
    }

    #[tokio::test]
    async fn test_page_markdown() {
        let response = get("/api/markdown/religion/christianity/history").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/markdown"));

        let markdown = body_text(response).await;
        assert!(markdown.starts_with("---\nroute: \"/religion/christianity/history\""));
        assert!(markdown.contains("# Church History"));
    }

    #[tokio::test]
    async fn test_search() {
        let json = json_response(get("/api/search?q=theology&limit=2").await).await;
        assert_eq!(json["rows"], 2);
        assert_eq!(json["data"][0]["route"], "/religion/christianity/theology");
    }

    #[tokio::test]
    async fn test_checks_report_is_clean() {
        let json = json_response(get("/api/checks").await).await;
        assert_eq!(json["pages_checked"], 7);
        assert_eq!(json["issues"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_sitemap() {
        let response = get("/sitemap.xml").await;
        assert_eq!(response.status(), StatusCode::OK);

        let xml = body_text(response).await;
        assert!(xml.contains("<loc>https://theopedia.example/es/studies/theology</loc>"));
    }
}
