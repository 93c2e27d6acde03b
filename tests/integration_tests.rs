//! Integration tests
//!
//! Test end-to-end behavior of the advisory answer service over HTTP

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use krishiproxy::config::Settings;
use krishiproxy::handlers::create_router;
use krishiproxy::locale::{advisory_pack, Language};
use serde_json::{json, Value};
use std::env;
use tower::ServiceExt;

/// Setup test environment
fn setup_test_env() {
    env::set_var("SERVER_HOST", "127.0.0.1");
    env::set_var("SERVER_PORT", "8083");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "text");
    env::set_var("CORS_ENABLED", "true");
    env::set_var("MAX_REQUEST_SIZE", "1048576");
    // Point the credential lookup at a variable no test sets, so the
    // answer endpoint stays in mock mode for the whole binary.
    env::set_var("UPSTREAM_API_KEY_VAR", "KRISHI_INTEGRATION_UNSET_KEY");
}

/// Create test settings
fn create_test_settings() -> Settings {
    setup_test_env();
    Settings::new().expect("Failed to create test settings")
}

/// Create the application under test
async fn create_test_app() -> Router {
    create_router(create_test_settings())
        .await
        .expect("Failed to create router")
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_test_app().await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let health_response = read_json_body(response).await;
    assert_eq!(health_response["status"], "healthy");
    assert_eq!(health_response["service"], "Krishi Advisory Proxy");
    assert!(health_response["version"].is_string());
    assert!(health_response["timestamp"].is_string());
    // No credential variable is set in this binary
    assert_eq!(health_response["details"]["answer_mode"], "mock");
}

#[tokio::test]
async fn test_liveness_check_endpoint() {
    let app = create_test_app().await;

    let request = Request::builder()
        .uri("/health/live")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let health_response = read_json_body(response).await;
    assert_eq!(health_response["status"], "alive");
    assert_eq!(health_response["details"]["answer_mode"], "not_checked");
    assert!(health_response["details"]["uptime_seconds"].is_number());
}

#[tokio::test]
async fn test_not_found_endpoint() {
    let app = create_test_app().await;

    let request = Request::builder()
        .uri("/nonexistent")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // Should return 404 Not Found
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("PUT")
        .uri("/api/answer")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // Should return 405 Method Not Allowed
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_answer_missing_prompt_field() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"language": "ml"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Missing prompt");
}

#[tokio::test]
async fn test_answer_whitespace_prompt() {
    let app = create_test_app().await;

    let payload = json!({"prompt": "   \n\t ", "language": "en"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Missing prompt");
}

#[tokio::test]
async fn test_answer_empty_body() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Missing prompt");
}

#[tokio::test]
async fn test_answer_malformed_json() {
    let app = create_test_app().await;

    let malformed_json = r#"{"prompt": }"#; // Malformed JSON syntax

    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(malformed_json))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // Body parsing is lenient, so a broken body degrades to an empty
    // prompt instead of a serde rejection
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Missing prompt");
}

#[tokio::test]
async fn test_answer_wrong_typed_prompt() {
    let app = create_test_app().await;

    let payload = json!({"prompt": 42, "language": "en"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // A non-string prompt is treated as absent
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_answer_mock_mode_malayalam() {
    let app = create_test_app().await;

    let payload = json!({"prompt": "വാഴയിൽ ഇലപ്പുള്ളി", "language": "ml"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(
        body["answer"],
        advisory_pack(Language::Ml).placeholder_answer
    );
    assert_eq!(body["mocked"], true);
}

#[tokio::test]
async fn test_answer_mock_mode_hindi() {
    let app = create_test_app().await;

    let payload = json!({"prompt": "गेहूं में पीले पत्ते", "language": "hi"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(
        body["answer"],
        advisory_pack(Language::Hi).placeholder_answer
    );
    assert_eq!(body["mocked"], true);
}

#[tokio::test]
async fn test_answer_mock_mode_defaults_to_english() {
    let app = create_test_app().await;

    let payload = json!({"prompt": "Yellow spots on banana leaves"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(
        body["answer"],
        advisory_pack(Language::En).placeholder_answer
    );
    assert_eq!(body["mocked"], true);
}

#[tokio::test]
async fn test_answer_mock_mode_unknown_language_falls_back() {
    let app = create_test_app().await;

    let payload = json!({"prompt": "நெல் இலைகளில் புள்ளிகள்", "language": "ta"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // Unrecognized locale codes fall back to English
    let body = read_json_body(response).await;
    assert_eq!(
        body["answer"],
        advisory_pack(Language::En).placeholder_answer
    );
    assert_eq!(body["mocked"], true);
}

#[tokio::test]
async fn test_answer_accepts_context_hints() {
    let app = create_test_app().await;

    let payload = json!({
        "prompt": "Leaves are yellowing",
        "language": "en",
        "context": {
            "crop": "banana",
            "season": "monsoon",
            "location": "Palakkad",
            "soil": "laterite"
        }
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // Context is accepted as-is, including keys the service never named
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_answer_without_content_type_header() {
    let app = create_test_app().await;

    let payload = json!({"prompt": "Pest on rice", "language": "en"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        // Intentionally not setting content-type header
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // The body is read as raw bytes, so no content type is required
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_size_limit() {
    let app = create_test_app().await;

    // Create an oversized request
    let large_prompt = "x".repeat(2_000_000); // 2MB content
    let payload = json!({"prompt": large_prompt, "language": "en"});

    let request = Request::builder()
        .method("POST")
        .uri("/api/answer")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // Should be rejected by the body size limit
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_cors_headers() {
    let app = create_test_app().await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/answer")
        .header("origin", "https://example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // CORS preflight request should succeed
    assert!(response.status().is_success() || response.status() == StatusCode::NO_CONTENT);

    // Check if CORS headers exist
    let headers = response.headers();
    assert!(headers.contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_concurrent_requests() {
    let app = create_test_app().await;

    // Create multiple concurrent health check requests
    let mut handles = vec![];

    for i in 0..10 {
        let app_clone = app.clone();
        let handle = tokio::spawn(async move {
            let request = Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap();

            let response = app_clone.oneshot(request).await.unwrap();
            (i, response.status())
        });
        handles.push(handle);
    }

    // Wait for all requests to complete
    for handle in handles {
        let (i, status) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK, "Request {} failed", i);
    }
}
