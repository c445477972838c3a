//! Dispatcher classification tests using WireMock
//!
//! These tests pin the status-code decision table: which statuses map to
//! which error variants, when bodies are JSON-decoded versus passed through
//! raw, and that network-level failures never enter the table.

use waha_sdk::{Payload, WahaClient, WahaError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(mock_server: &MockServer) -> WahaClient {
    WahaClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap()
}

async fn respond_with(status: u16, body: Option<serde_json::Value>) -> MockServer {
    let mock_server = MockServer::start().await;
    let template = match body {
        Some(body) => ResponseTemplate::new(status).set_body_json(body),
        None => ResponseTemplate::new(status),
    };
    Mock::given(method("GET"))
        .and(path("/api/sessions"))
        .respond_with(template)
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_401_maps_to_authentication() {
    let mock_server = respond_with(401, None).await;
    let err = client_for(&mock_server)
        .sessions()
        .list(false)
        .await
        .unwrap_err();
    assert!(matches!(err, WahaError::Authentication(_)));
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let mock_server = respond_with(404, None).await;
    let err = client_for(&mock_server)
        .sessions()
        .list(false)
        .await
        .unwrap_err();
    assert!(matches!(err, WahaError::NotFound(_)));
}

#[tokio::test]
async fn test_429_maps_to_rate_limit() {
    let mock_server = respond_with(429, None).await;
    let err = client_for(&mock_server)
        .sessions()
        .list(false)
        .await
        .unwrap_err();
    assert!(matches!(err, WahaError::RateLimit(_)));
}

#[tokio::test]
async fn test_500_uses_remote_message_and_status() {
    let mock_server = respond_with(500, Some(serde_json::json!({"message": "db down"}))).await;
    let err = client_for(&mock_server)
        .sessions()
        .list(false)
        .await
        .unwrap_err();

    match &err {
        WahaError::Server { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "db down");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
    let text = err.to_string();
    assert!(text.contains("db down"));
    assert!(text.contains("500"));
}

#[tokio::test]
async fn test_503_without_message_uses_default() {
    let mock_server = respond_with(503, None).await;
    let err = client_for(&mock_server)
        .sessions()
        .list(false)
        .await
        .unwrap_err();

    match err {
        WahaError::Server { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Server error");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_400_maps_to_generic_api_error() {
    let mock_server = respond_with(400, Some(serde_json::json!({"message": "bad chatId"}))).await;
    let err = client_for(&mock_server)
        .sessions()
        .list(false)
        .await
        .unwrap_err();

    match err {
        WahaError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad chatId");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_403_without_message_uses_unknown_error() {
    let mock_server = respond_with(403, None).await;
    let err = client_for(&mock_server)
        .sessions()
        .list(false)
        .await
        .unwrap_err();

    match err {
        WahaError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Unknown error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_200_json_body_roundtrips() {
    let body = serde_json::json!({
        "name": "default",
        "status": "WORKING",
        "config": {"webhooks": []}
    });
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions/default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let value = client_for(&mock_server)
        .sessions()
        .get("default")
        .await
        .unwrap();
    assert_eq!(value, body);
}

#[tokio::test]
async fn test_201_is_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sessions"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"name": "default"})),
        )
        .mount(&mock_server)
        .await;

    let value = client_for(&mock_server)
        .sessions()
        .create(&Default::default())
        .await
        .unwrap();
    assert_eq!(value["name"], "default");
}

#[tokio::test]
async fn test_204_empty_body_is_null() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/sessions/default"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let value = client_for(&mock_server)
        .sessions()
        .delete("default")
        .await
        .unwrap();
    assert_eq!(value, serde_json::Value::Null);
}

#[tokio::test]
async fn test_binary_body_is_passed_through_raw() {
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/screenshot"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png.clone(), "image/png"))
        .mount(&mock_server)
        .await;

    let payload = client_for(&mock_server)
        .sessions()
        .screenshot("default", false)
        .await
        .unwrap();
    assert_eq!(payload, Payload::Bytes(png));
}

#[tokio::test]
async fn test_unusual_2xx_status_is_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions"))
        .respond_with(
            ResponseTemplate::new(250).set_body_json(serde_json::json!([{"name": "default"}])),
        )
        .mount(&mock_server)
        .await;

    let value = client_for(&mock_server)
        .sessions()
        .list(false)
        .await
        .unwrap();
    assert_eq!(value[0]["name"], "default");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Port 9 on loopback has no listener.
    let client = WahaClient::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();

    let err = client.sessions().list(false).await.unwrap_err();
    assert!(matches!(err, WahaError::Transport(_)));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = WahaClient::builder()
        .base_url(mock_server.uri())
        .timeout(std::time::Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.sessions().list(false).await.unwrap_err();
    match err {
        WahaError::Transport(e) => assert!(e.is_timeout()),
        other => panic!("expected Transport error, got {other:?}"),
    }
}
