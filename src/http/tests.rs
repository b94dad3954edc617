//! Tests for the HTTP transport module

use super::*;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_empty());
    assert!(config.default_headers.is_empty());
}

#[test]
fn test_client_config_builder() {
    let config = ClientConfig::builder()
        .base_url("https://ledger.example.com")
        .timeout(Duration::from_secs(60))
        .header("Authorization", "Basic abc")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://ledger.example.com");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("Authorization"),
        Some(&"Basic abc".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_request_posts_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/create-account"))
        .and(body_partial_json(serde_json::json!({"id": "alice"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "alice",
            "quorum": 1
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let resp = client
        .request("/create-account", serde_json::json!({"id": "alice"}))
        .await
        .unwrap();

    assert_eq!(resp["id"], "alice");
    assert_eq!(resp["quorum"], 1);
}

#[tokio::test]
async fn test_request_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/list-accounts"))
        .and(header("Authorization", "Basic secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .header("Authorization", "Basic secret")
        .build();
    let client = ApiClient::with_config(config);

    let result = client
        .request("/list-accounts", serde_json::json!({}))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_client_error_becomes_request_error_with_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/get-feed"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": "SEQ002",
            "message": "feed not found"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let err = client
        .request("/get-feed", serde_json::json!({"id": "gone"}))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(!err.is_retryable());
    match err {
        crate::error::Error::Request {
            status,
            ref code,
            ref message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, "SEQ002");
            assert_eq!(message, "feed not found");
        }
        other => panic!("expected request error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_with_unparseable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/list-accounts"))
        .respond_with(ResponseTemplate::new(422).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let err = client
        .request("/list-accounts", serde_json::json!({}))
        .await
        .unwrap_err();

    match err {
        crate::error::Error::Request {
            status,
            ref code,
            ref message,
        } => {
            assert_eq!(status, 422);
            assert!(code.is_empty());
            assert_eq!(message, "not json");
        }
        other => panic!("expected request error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_retryable_and_not_retried_here() {
    let mock_server = MockServer::start().await;

    // Exactly one request must arrive: the transport never retries.
    Mock::given(method("POST"))
        .and(path("/list-accounts"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let err = client
        .request("/list-accounts", serde_json::json!({}))
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    match err {
        crate::error::Error::Server { status, ref body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "unavailable");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_full_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    // Client pointed at a dead base URL; full URL should win.
    let client = ApiClient::new("https://unused.example.com");
    let resp = client
        .request(
            &format!("{}/ping", mock_server.uri()),
            serde_json::json!({}),
        )
        .await
        .unwrap();

    assert_eq!(resp["ok"], true);
}

#[tokio::test]
async fn test_no_content_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/delete-feed"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());
    let resp = client
        .request("/delete-feed", serde_json::json!({"id": "f1"}))
        .await
        .unwrap();

    assert!(resp.is_null());
}
