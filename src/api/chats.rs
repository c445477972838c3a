//! Chat management API

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::{Payload, WahaClient};
use crate::error::WahaError;
use crate::utils::encode_path_segment;

#[derive(Serialize)]
struct ReadMessagesRequest<'a> {
    #[serde(rename = "messageIds", skip_serializing_if = "Option::is_none")]
    message_ids: Option<&'a [String]>,
}

/// Chat facade
pub struct ChatsApi {
    client: WahaClient,
}

impl ChatsApi {
    pub fn new(client: WahaClient) -> Self {
        Self { client }
    }

    fn chat_path(session: &str, chat_id: &str) -> String {
        format!(
            "/api/{}/chats/{}",
            encode_path_segment(session),
            encode_path_segment(chat_id)
        )
    }

    /// List chats
    ///
    /// `GET /api/{session}/chats`
    pub async fn list(
        &self,
        session: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Value, WahaError> {
        let path = format!("/api/{}/chats", encode_path_segment(session));
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }
        self.client.get(&path, &query).await?.into_json()
    }

    /// Chats overview (last message, unread counts)
    ///
    /// `GET /api/{session}/chats/overview`
    pub async fn overview(&self, session: &str) -> Result<Value, WahaError> {
        let path = format!("/api/{}/chats/overview", encode_path_segment(session));
        self.client.get(&path, &[]).await?.into_json()
    }

    /// Chat picture
    ///
    /// `GET /api/{session}/chats/{chatId}/picture`. With `accept_json` the
    /// request asks for the base64 JSON rendition instead of image bytes.
    pub async fn picture(
        &self,
        session: &str,
        chat_id: &str,
        accept_json: bool,
    ) -> Result<Payload, WahaError> {
        let path = format!("{}/picture", Self::chat_path(session, chat_id));
        let accept = if accept_json {
            "application/json"
        } else {
            "image/png"
        };
        self.client
            .request_with_accept(Method::GET, &path, &[], None::<&Value>, Some(accept))
            .await
    }

    /// Mark a chat as unread
    ///
    /// `POST /api/{session}/chats/{chatId}/unread`
    pub async fn unread(&self, session: &str, chat_id: &str) -> Result<Value, WahaError> {
        let path = format!("{}/unread", Self::chat_path(session, chat_id));
        self.client.post_empty(&path).await?.into_json()
    }

    /// `POST /api/{session}/chats/{chatId}/archive`
    pub async fn archive(&self, session: &str, chat_id: &str) -> Result<Value, WahaError> {
        let path = format!("{}/archive", Self::chat_path(session, chat_id));
        self.client.post_empty(&path).await?.into_json()
    }

    /// `POST /api/{session}/chats/{chatId}/unarchive`
    pub async fn unarchive(&self, session: &str, chat_id: &str) -> Result<Value, WahaError> {
        let path = format!("{}/unarchive", Self::chat_path(session, chat_id));
        self.client.post_empty(&path).await?.into_json()
    }

    /// `DELETE /api/{session}/chats/{chatId}`
    pub async fn delete(&self, session: &str, chat_id: &str) -> Result<Value, WahaError> {
        let path = Self::chat_path(session, chat_id);
        self.client.delete(&path).await?.into_json()
    }

    /// Mark messages in a chat as read
    ///
    /// `POST /api/{session}/chats/{chatId}/messages/read`. Without ids the
    /// whole chat is marked.
    pub async fn read_messages(
        &self,
        session: &str,
        chat_id: &str,
        message_ids: Option<&[String]>,
    ) -> Result<Value, WahaError> {
        let path = format!("{}/messages/read", Self::chat_path(session, chat_id));
        let body = ReadMessagesRequest { message_ids };
        self.client.post(&path, &body).await?.into_json()
    }

    /// Fetch messages from a chat
    ///
    /// `GET /api/{session}/chats/{chatId}/messages`
    pub async fn messages(
        &self,
        session: &str,
        chat_id: &str,
        limit: Option<u32>,
        download_media: bool,
    ) -> Result<Value, WahaError> {
        let path = format!("{}/messages", Self::chat_path(session, chat_id));
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if download_media {
            query.push(("downloadMedia", "true".to_string()));
        }
        self.client.get(&path, &query).await?.into_json()
    }

    /// Fetch one message by id
    ///
    /// `GET /api/{session}/chats/{chatId}/messages/{messageId}`
    pub async fn message(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
        download_media: bool,
    ) -> Result<Value, WahaError> {
        let path = format!(
            "{}/messages/{}",
            Self::chat_path(session, chat_id),
            encode_path_segment(message_id)
        );
        let mut query: Vec<(&str, String)> = Vec::new();
        if download_media {
            query.push(("downloadMedia", "true".to_string()));
        }
        self.client.get(&path, &query).await?.into_json()
    }
}
