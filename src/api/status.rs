//! Status (stories) API

use serde::Serialize;
use serde_json::Value;

use crate::client::WahaClient;
use crate::error::WahaError;
use crate::types::{FileInput, FilePayload};
use crate::utils::encode_path_segment;

#[derive(Serialize)]
struct TextStatusRequest<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct MediaStatusRequest<'a> {
    file: FilePayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteStatusRequest<'a> {
    message_id: &'a str,
}

/// Status facade
pub struct StatusApi {
    client: WahaClient,
}

impl StatusApi {
    pub fn new(client: WahaClient) -> Self {
        Self { client }
    }

    fn status_path(session: &str, suffix: &str) -> String {
        format!("/api/{}/status/{}", encode_path_segment(session), suffix)
    }

    /// Publish a text status
    ///
    /// `POST /api/{session}/status/text`
    pub async fn send_text(&self, session: &str, text: &str) -> Result<Value, WahaError> {
        let path = Self::status_path(session, "text");
        self.client
            .post(&path, &TextStatusRequest { text })
            .await?
            .into_json()
    }

    /// Publish an image status
    ///
    /// `POST /api/{session}/status/image`. A path input defaults to
    /// `image/jpeg`.
    pub async fn send_image(
        &self,
        session: &str,
        file: impl Into<FileInput>,
        caption: Option<&str>,
    ) -> Result<Value, WahaError> {
        let path = Self::status_path(session, "image");
        let file = file.into().into_payload("image/jpeg").await?;
        self.client
            .post(&path, &MediaStatusRequest { file, caption })
            .await?
            .into_json()
    }

    /// Publish a voice status
    ///
    /// `POST /api/{session}/status/voice`. A path input defaults to
    /// `audio/ogg; codecs=opus`.
    pub async fn send_voice(
        &self,
        session: &str,
        file: impl Into<FileInput>,
    ) -> Result<Value, WahaError> {
        let path = Self::status_path(session, "voice");
        let file = file.into().into_payload("audio/ogg; codecs=opus").await?;
        self.client
            .post(&path, &MediaStatusRequest { file, caption: None })
            .await?
            .into_json()
    }

    /// Publish a video status
    ///
    /// `POST /api/{session}/status/video`. A path input defaults to
    /// `video/mp4`.
    pub async fn send_video(
        &self,
        session: &str,
        file: impl Into<FileInput>,
        caption: Option<&str>,
    ) -> Result<Value, WahaError> {
        let path = Self::status_path(session, "video");
        let file = file.into().into_payload("video/mp4").await?;
        self.client
            .post(&path, &MediaStatusRequest { file, caption })
            .await?
            .into_json()
    }

    /// Delete a published status
    ///
    /// `POST /api/{session}/status/delete`
    pub async fn delete(&self, session: &str, message_id: &str) -> Result<Value, WahaError> {
        let path = Self::status_path(session, "delete");
        self.client
            .post(&path, &DeleteStatusRequest { message_id })
            .await?
            .into_json()
    }

    /// Reserve a message id for a future status
    ///
    /// `GET /api/{session}/status/new-message-id`
    pub async fn new_message_id(&self, session: &str) -> Result<Value, WahaError> {
        let path = Self::status_path(session, "new-message-id");
        self.client.get(&path, &[]).await?.into_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_status_field_name() {
        let value = serde_json::to_value(DeleteStatusRequest { message_id: "m1" }).unwrap();
        assert_eq!(value, serde_json::json!({"messageId": "m1"}));
    }

    #[test]
    fn test_status_path() {
        assert_eq!(
            StatusApi::status_path("default", "text"),
            "/api/default/status/text"
        );
    }
}
