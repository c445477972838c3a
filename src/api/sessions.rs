//! Session management API
//!
//! A session is one WhatsApp account connection managed by the gateway,
//! identified by a caller-chosen name.

use serde::Serialize;
use serde_json::Value;

use crate::client::{Payload, WahaClient};
use crate::error::WahaError;
use crate::utils::encode_path_segment;

/// Which rendition of the pairing QR code to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrFormat {
    /// PNG image bytes.
    Image,
    /// The raw QR value as JSON.
    Raw,
}

impl QrFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrFormat::Image => "image",
            QrFormat::Raw => "raw",
        }
    }
}

/// Optional fields for [`SessionsApi::create`].
///
/// Unset fields are omitted from the request body entirely; the gateway
/// then applies its own defaults (auto-generated name, immediate start).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSessionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<bool>,
}

#[derive(Serialize)]
struct UpdateSessionRequest<'a> {
    name: &'a str,
    config: &'a Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestCodeRequest<'a> {
    phone_number: &'a str,
}

/// Session management facade
pub struct SessionsApi {
    client: WahaClient,
}

impl SessionsApi {
    pub fn new(client: WahaClient) -> Self {
        Self { client }
    }

    /// List sessions
    ///
    /// `GET /api/sessions`. With `all` set, stopped sessions are included.
    pub async fn list(&self, all: bool) -> Result<Value, WahaError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if all {
            query.push(("all", "true".to_string()));
        }
        self.client.get("/api/sessions", &query).await?.into_json()
    }

    /// Get one session
    ///
    /// `GET /api/sessions/{name}`
    pub async fn get(&self, name: &str) -> Result<Value, WahaError> {
        let path = format!("/api/sessions/{}", encode_path_segment(name));
        self.client.get(&path, &[]).await?.into_json()
    }

    /// Create a session
    ///
    /// `POST /api/sessions`
    pub async fn create(&self, options: &CreateSessionOptions) -> Result<Value, WahaError> {
        self.client.post("/api/sessions", options).await?.into_json()
    }

    /// Replace a session's configuration
    ///
    /// `PUT /api/sessions/{name}`. The full config is required.
    pub async fn update(&self, name: &str, config: &Value) -> Result<Value, WahaError> {
        let path = format!("/api/sessions/{}", encode_path_segment(name));
        let body = UpdateSessionRequest { name, config };
        self.client.put(&path, &body).await?.into_json()
    }

    /// `POST /api/sessions/{name}/start`
    pub async fn start(&self, name: &str) -> Result<Value, WahaError> {
        let path = format!("/api/sessions/{}/start", encode_path_segment(name));
        self.client.post_empty(&path).await?.into_json()
    }

    /// `POST /api/sessions/{name}/stop`
    pub async fn stop(&self, name: &str) -> Result<Value, WahaError> {
        let path = format!("/api/sessions/{}/stop", encode_path_segment(name));
        self.client.post_empty(&path).await?.into_json()
    }

    /// `POST /api/sessions/{name}/restart`
    pub async fn restart(&self, name: &str) -> Result<Value, WahaError> {
        let path = format!("/api/sessions/{}/restart", encode_path_segment(name));
        self.client.post_empty(&path).await?.into_json()
    }

    /// `POST /api/sessions/{name}/logout`
    pub async fn logout(&self, name: &str) -> Result<Value, WahaError> {
        let path = format!("/api/sessions/{}/logout", encode_path_segment(name));
        self.client.post_empty(&path).await?.into_json()
    }

    /// `DELETE /api/sessions/{name}`
    pub async fn delete(&self, name: &str) -> Result<Value, WahaError> {
        let path = format!("/api/sessions/{}", encode_path_segment(name));
        self.client.delete(&path).await?.into_json()
    }

    /// Account info for an authenticated session
    ///
    /// `GET /api/sessions/{name}/me`
    pub async fn me(&self, name: &str) -> Result<Value, WahaError> {
        let path = format!("/api/sessions/{}/me", encode_path_segment(name));
        self.client.get(&path, &[]).await?.into_json()
    }

    /// Pairing QR code
    ///
    /// `GET /api/{session}/auth/qr?format=image|raw`. For
    /// [`QrFormat::Image`] the request asks for `image/png` and the result
    /// is [`Payload::Bytes`]; for [`QrFormat::Raw`] the gateway answers
    /// JSON with the raw value.
    pub async fn qr(&self, name: &str, format: QrFormat) -> Result<Payload, WahaError> {
        let path = format!("/api/{}/auth/qr", encode_path_segment(name));
        let query = [("format", format.as_str().to_string())];
        let accept = match format {
            QrFormat::Image => "image/png",
            QrFormat::Raw => "application/json",
        };
        self.client
            .request_with_accept(
                reqwest::Method::GET,
                &path,
                &query,
                None::<&Value>,
                Some(accept),
            )
            .await
    }

    /// Request a pairing code for phone-number linking
    ///
    /// `POST /api/{session}/auth/request-code`
    pub async fn request_code(&self, name: &str, phone_number: &str) -> Result<Value, WahaError> {
        let path = format!("/api/{}/auth/request-code", encode_path_segment(name));
        let body = RequestCodeRequest { phone_number };
        self.client.post(&path, &body).await?.into_json()
    }

    /// Screenshot of the session's WhatsApp Web view
    ///
    /// `GET /api/screenshot?session={name}`. With `accept_json` the request
    /// asks for the base64 JSON rendition instead of PNG bytes.
    pub async fn screenshot(&self, name: &str, accept_json: bool) -> Result<Payload, WahaError> {
        let query = [("session", name.to_string())];
        let accept = if accept_json {
            "application/json"
        } else {
            "image/png"
        };
        self.client
            .request_with_accept(
                reqwest::Method::GET,
                "/api/screenshot",
                &query,
                None::<&Value>,
                Some(accept),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_options_default_is_empty_object() {
        let value = serde_json::to_value(CreateSessionOptions::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_create_options_sparse_fields() {
        let options = CreateSessionOptions {
            name: Some("default".to_string()),
            config: None,
            start: Some(false),
        };
        let value = serde_json::to_value(options).unwrap();
        assert_eq!(value, serde_json::json!({"name": "default", "start": false}));
    }

    #[test]
    fn test_request_code_field_name() {
        let value = serde_json::to_value(RequestCodeRequest {
            phone_number: "+1234567890",
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"phoneNumber": "+1234567890"}));
    }

    #[test]
    fn test_qr_format_strings() {
        assert_eq!(QrFormat::Image.as_str(), "image");
        assert_eq!(QrFormat::Raw.as_str(), "raw");
    }
}
