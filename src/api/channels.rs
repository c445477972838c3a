//! WhatsApp Channels API

use serde::Serialize;
use serde_json::Value;

use crate::client::WahaClient;
use crate::error::WahaError;
use crate::utils::encode_path_segment;

#[derive(Serialize)]
struct CreateChannelRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Channel facade
pub struct ChannelsApi {
    client: WahaClient,
}

impl ChannelsApi {
    pub fn new(client: WahaClient) -> Self {
        Self { client }
    }

    /// `GET /api/{session}/channels`
    pub async fn list(&self, session: &str) -> Result<Value, WahaError> {
        let path = format!("/api/{}/channels", encode_path_segment(session));
        self.client.get(&path, &[]).await?.into_json()
    }

    /// `GET /api/{session}/channels/{channelId}`
    pub async fn get(&self, session: &str, channel_id: &str) -> Result<Value, WahaError> {
        let path = format!(
            "/api/{}/channels/{}",
            encode_path_segment(session),
            encode_path_segment(channel_id)
        );
        self.client.get(&path, &[]).await?.into_json()
    }

    /// Create a channel
    ///
    /// `POST /api/{session}/channels`
    pub async fn create(
        &self,
        session: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Value, WahaError> {
        let path = format!("/api/{}/channels", encode_path_segment(session));
        let body = CreateChannelRequest { name, description };
        self.client.post(&path, &body).await?.into_json()
    }

    /// `DELETE /api/{session}/channels/{channelId}`
    pub async fn delete(&self, session: &str, channel_id: &str) -> Result<Value, WahaError> {
        let path = format!(
            "/api/{}/channels/{}",
            encode_path_segment(session),
            encode_path_segment(channel_id)
        );
        self.client.delete(&path).await?.into_json()
    }

    /// Fetch channel messages
    ///
    /// `GET /api/{session}/chats/{channelId}/messages` — channels share the
    /// chats message route on the gateway.
    pub async fn messages(
        &self,
        session: &str,
        channel_id: &str,
        limit: Option<u32>,
    ) -> Result<Value, WahaError> {
        let path = format!(
            "/api/{}/chats/{}/messages",
            encode_path_segment(session),
            encode_path_segment(channel_id)
        );
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.client.get(&path, &query).await?.into_json()
    }
}
