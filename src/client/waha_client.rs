//! WAHA HTTP Client
//!
//! Provides the transport dispatcher all facade methods delegate to.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tower::Service;

use crate::api::{
    ChannelsApi, ChatsApi, ContactsApi, GroupsApi, MessagesApi, ProfileApi, SessionsApi, StatusApi,
};
use crate::error::WahaError;
use crate::types::ApiKey;

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

type MiddlewareFuture =
    Pin<Box<dyn Future<Output = Result<reqwest::Response, reqwest::Error>> + Send>>;
pub(crate) type MiddlewareExecutor = Arc<dyn Fn(reqwest::Request) -> MiddlewareFuture + Send + Sync>;

/// A classified response body.
///
/// The gateway answers most endpoints with JSON; binary media endpoints
/// (QR codes, screenshots, pictures) answer with raw bytes. The dispatcher
/// picks the variant from the response `Content-Type` and does not interpret
/// the payload further.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Bytes(Vec<u8>),
}

impl Payload {
    /// Unwrap as JSON, parsing raw bytes when the gateway omitted the
    /// content type. An empty body becomes `Value::Null`.
    pub fn into_json(self) -> Result<Value, WahaError> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Bytes(bytes) if bytes.is_empty() => Ok(Value::Null),
            Payload::Bytes(bytes) => Ok(serde_json::from_slice(&bytes)?),
        }
    }

    /// Unwrap as raw bytes; a JSON payload is re-serialized.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Json(value) => value.to_string().into_bytes(),
            Payload::Bytes(bytes) => bytes,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::Json(_) => None,
            Payload::Bytes(bytes) => Some(bytes),
        }
    }
}

/// WAHA API Client
///
/// The single choke point for all outbound calls and response
/// interpretation. Holds the immutable configuration (base URL, optional
/// API key, timeouts) and a shared `reqwest` connection pool, so clones
/// are cheap and concurrent calls are independent.
#[derive(Clone)]
pub struct WahaClient {
    http: Client,
    base_url: String,
    api_key: Option<ApiKey>,
    middleware_executor: Option<MiddlewareExecutor>,
}

impl std::fmt::Debug for WahaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WahaClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field(
                "middleware_executor",
                &self.middleware_executor.as_ref().map(|_| ".."),
            )
            .finish_non_exhaustive()
    }
}

impl WahaClient {
    /// Create a new client builder
    pub fn builder() -> super::builder::WahaClientBuilder {
        super::builder::WahaClientBuilder::default()
    }

    /// Get the base URL (trailing slash already stripped)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an API key was configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the underlying [`reqwest::Client`] for raw HTTP requests.
    ///
    /// Note: requests made through this client bypass the middleware
    /// pipeline. Use [`request`](Self::request) or the verb helpers for
    /// middleware-aware requests.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn new(
        http: Client,
        base_url: String,
        api_key: Option<ApiKey>,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
            middleware_executor: None,
        }
    }

    pub(crate) fn with_middleware_executor(mut self, executor: MiddlewareExecutor) -> Self {
        self.middleware_executor = Some(executor);
        self
    }

    pub(crate) async fn send_request(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, reqwest::Error> {
        if let Some(executor) = &self.middleware_executor {
            (executor)(request).await
        } else {
            self.http.execute(request).await
        }
    }

    /// Make a request to the WAHA API
    ///
    /// # Arguments
    /// * `method` - HTTP verb
    /// * `endpoint` - API endpoint path (e.g. `/api/sessions`)
    /// * `query` - Query parameters; absent options are simply not included
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    /// - [`WahaError::Transport`] when no HTTP response was received
    /// - The status-keyed variants ([`WahaError::Authentication`],
    ///   [`WahaError::NotFound`], [`WahaError::RateLimit`],
    ///   [`WahaError::Server`], [`WahaError::Api`]) for error statuses
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Payload, WahaError> {
        self.request_with_accept(method, endpoint, query, body, None)
            .await
    }

    /// Same as [`request`](Self::request) with an explicit `Accept` header,
    /// used by binary endpoints to choose between the raw rendition and the
    /// base64 JSON one.
    pub(crate) async fn request_with_accept<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        accept: Option<&str>,
    ) -> Result<Payload, WahaError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut builder = self.http.request(method, url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        if let Some(accept) = accept {
            builder = builder.header(reqwest::header::ACCEPT, accept);
        }

        let request = builder.build()?;
        let response = self.send_request(request).await?;
        Self::classify(response).await
    }

    /// Make a GET request
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Payload, WahaError> {
        self.request(Method::GET, endpoint, query, None::<&Value>)
            .await
    }

    /// Make a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Payload, WahaError> {
        self.request(Method::POST, endpoint, &[], Some(body)).await
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, endpoint: &str) -> Result<Payload, WahaError> {
        self.request(Method::POST, endpoint, &[], None::<&Value>)
            .await
    }

    /// Make a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Payload, WahaError> {
        self.request(Method::PUT, endpoint, &[], Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, endpoint: &str) -> Result<Payload, WahaError> {
        self.request(Method::DELETE, endpoint, &[], None::<&Value>)
            .await
    }

    /// Map an HTTP response to a payload or a typed error.
    ///
    /// Status codes are evaluated in order: 401, 404, 429, 5xx, then any
    /// other 4xx. Everything else (2xx included) is a success whose body is
    /// JSON-decoded when the content type says JSON and returned as raw
    /// bytes otherwise. This layer never retries.
    async fn classify(response: reqwest::Response) -> Result<Payload, WahaError> {
        let status = response.status().as_u16();

        match status {
            401 => Err(WahaError::Authentication(
                "Authentication failed. Please check your API key.".to_string(),
            )),
            404 => Err(WahaError::NotFound("Resource not found".to_string())),
            429 => Err(WahaError::RateLimit(
                "Rate limit exceeded. Please try again later.".to_string(),
            )),
            s if s >= 500 => {
                let message = Self::remote_message(response)
                    .await
                    .unwrap_or_else(|| "Server error".to_string());
                Err(WahaError::Server { status: s, message })
            }
            s if s >= 400 => {
                let message = Self::remote_message(response)
                    .await
                    .unwrap_or_else(|| "Unknown error".to_string());
                Err(WahaError::Api { status: s, message })
            }
            _ => Self::decode_body(response).await,
        }
    }

    /// Extract the gateway's `message` field from an error body, if any.
    async fn remote_message(response: reqwest::Response) -> Option<String> {
        let value: Value = response.json().await.ok()?;
        value.get("message")?.as_str().map(str::to_string)
    }

    async fn decode_body(response: reqwest::Response) -> Result<Payload, WahaError> {
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        let bytes = response.bytes().await?;
        if is_json {
            if bytes.is_empty() {
                return Ok(Payload::Json(Value::Null));
            }
            Ok(Payload::Json(serde_json::from_slice(&bytes)?))
        } else {
            Ok(Payload::Bytes(bytes.to_vec()))
        }
    }

    // Resource facades. Each holds a cheap clone of this client.

    pub fn sessions(&self) -> SessionsApi {
        SessionsApi::new(self.clone())
    }

    pub fn messages(&self) -> MessagesApi {
        MessagesApi::new(self.clone())
    }

    pub fn chats(&self) -> ChatsApi {
        ChatsApi::new(self.clone())
    }

    pub fn contacts(&self) -> ContactsApi {
        ContactsApi::new(self.clone())
    }

    pub fn groups(&self) -> GroupsApi {
        GroupsApi::new(self.clone())
    }

    pub fn status(&self) -> StatusApi {
        StatusApi::new(self.clone())
    }

    pub fn profile(&self) -> ProfileApi {
        ProfileApi::new(self.clone())
    }

    pub fn channels(&self) -> ChannelsApi {
        ChannelsApi::new(self.clone())
    }
}

impl Service<reqwest::Request> for WahaClient {
    type Response = reqwest::Response;
    type Error = reqwest::Error;
    type Future = MiddlewareFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: reqwest::Request) -> Self::Future {
        let client = self.http.clone();
        Box::pin(async move { client.execute(req).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_into_json_empty_bytes() {
        assert_eq!(
            Payload::Bytes(Vec::new()).into_json().unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_payload_into_json_parses_bytes() {
        let payload = Payload::Bytes(br#"{"ok":true}"#.to_vec());
        assert_eq!(
            payload.into_json().unwrap(),
            serde_json::json!({"ok": true})
        );
    }

    #[test]
    fn test_payload_accessors() {
        let json = Payload::Json(serde_json::json!({"a": 1}));
        assert!(json.as_json().is_some());
        assert!(json.as_bytes().is_none());

        let bytes = Payload::Bytes(vec![1, 2, 3]);
        assert!(bytes.as_json().is_none());
        assert_eq!(bytes.as_bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(bytes.into_bytes(), vec![1, 2, 3]);
    }
}
