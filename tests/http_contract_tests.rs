//! HTTP-level contract tests
//!
//! Configuration normalization, credential header behavior across verbs,
//! and independence of concurrent calls through one client.

use std::time::Duration;

use waha_sdk::types::ApiKey;
use waha_sdk::WahaClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_default_base_endpoint() {
    let client = WahaClient::builder().build().unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000");
}

#[test]
fn test_trailing_slash_normalized_away() {
    let client = WahaClient::builder()
        .base_url("http://localhost:3000/")
        .build()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000");
}

#[tokio::test]
async fn test_api_key_sent_on_every_verb() {
    let mock_server = MockServer::start().await;
    let json_ok = ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true}));

    Mock::given(method("GET"))
        .and(path("/api/sessions/default"))
        .and(header("X-Api-Key", "secret-key"))
        .respond_with(json_ok.clone())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/sessions/default/start"))
        .and(header("X-Api-Key", "secret-key"))
        .respond_with(json_ok.clone())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/sessions/default"))
        .and(header("X-Api-Key", "secret-key"))
        .respond_with(json_ok.clone())
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/sessions/default"))
        .and(header("X-Api-Key", "secret-key"))
        .respond_with(json_ok.clone())
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WahaClient::builder()
        .base_url(mock_server.uri())
        .api_key(ApiKey::new("secret-key").unwrap())
        .build()
        .unwrap();

    let sessions = client.sessions();
    sessions.get("default").await.unwrap();
    sessions.start("default").await.unwrap();
    sessions
        .update("default", &serde_json::json!({"webhooks": []}))
        .await
        .unwrap();
    sessions.delete("default").await.unwrap();
}

#[tokio::test]
async fn test_no_api_key_header_without_credential() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = WahaClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();
    client.sessions().list(false).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("x-api-key"));
}

#[tokio::test]
async fn test_json_content_type_on_bodied_requests() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sendText"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WahaClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();
    client
        .messages()
        .send_text("default", "1@c.us", "hi", &Default::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_millis(20)),
        )
        .expect(16)
        .mount(&mock_server)
        .await;

    let client = WahaClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let calls = (0..16).map(|_| {
        let sessions = client.sessions();
        async move { sessions.list(false).await }
    });
    let results = futures::future::join_all(calls).await;
    assert!(results.into_iter().all(|r| r.is_ok()));
}

#[tokio::test]
async fn test_error_does_not_poison_client() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sessions/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/sessions/default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = WahaClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    assert!(client.sessions().get("missing").await.is_err());
    assert!(client.sessions().get("default").await.is_ok());
}
