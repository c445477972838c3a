//! Message sending and message actions
//!
//! Covers the `/api/send*` family plus reactions, stars, edits, pins, and
//! deletion. Attachments accept either a pre-built
//! [`FilePayload`](crate::types::FilePayload) or a local path; see
//! [`FileInput`](crate::types::FileInput).

use serde::Serialize;
use serde_json::Value;

use crate::client::WahaClient;
use crate::error::WahaError;
use crate::types::{FileInput, FilePayload};
use crate::utils::encode_path_segment;

/// Optional fields for [`MessagesApi::send_text`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendTextOptions {
    /// Message id to reply to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    /// Chat ids to mention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<String>>,
    /// Set `Some(false)` to suppress the link preview (gateway default: on).
    #[serde(rename = "linkPreview", skip_serializing_if = "Option::is_none")]
    pub link_preview: Option<bool>,
    #[serde(
        rename = "linkPreviewHighQuality",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_preview_high_quality: Option<bool>,
}

/// Optional fields for [`MessagesApi::send_seen`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendSeenOptions {
    #[serde(rename = "messageIds", skip_serializing_if = "Option::is_none")]
    pub message_ids: Option<Vec<String>>,
    /// Group participant whose messages are being acknowledged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
}

/// Optional fields for [`MessagesApi::send_video`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendVideoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Send as a rounded video note.
    #[serde(rename = "asNote", skip_serializing_if = "Option::is_none")]
    pub as_note: Option<bool>,
    /// Ask the gateway to transcode for WhatsApp compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<bool>,
}

#[derive(Serialize)]
struct SendTextRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    text: &'a str,
    #[serde(flatten)]
    options: &'a SendTextOptions,
}

#[derive(Serialize)]
struct SendSeenRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    #[serde(flatten)]
    options: &'a SendSeenOptions,
}

#[derive(Serialize)]
struct SendMediaRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    file: FilePayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    convert: Option<bool>,
}

#[derive(Serialize)]
struct SendVideoRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    file: FilePayload,
    #[serde(flatten)]
    options: &'a SendVideoOptions,
}

#[derive(Serialize)]
struct SendLocationRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    latitude: f64,
    longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

#[derive(Serialize)]
struct SendContactsRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    contacts: &'a [Value],
}

#[derive(Serialize)]
struct SendPollRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    poll: &'a Value,
}

#[derive(Serialize)]
struct ForwardMessageRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    #[serde(rename = "messageId")]
    message_id: &'a str,
}

#[derive(Serialize)]
struct ReactionRequest<'a> {
    session: &'a str,
    #[serde(rename = "messageId")]
    message_id: &'a str,
    reaction: &'a str,
}

#[derive(Serialize)]
struct StarRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
    #[serde(rename = "messageId")]
    message_id: &'a str,
    star: bool,
}

#[derive(Serialize)]
struct EditMessageRequest<'a> {
    text: &'a str,
    #[serde(rename = "linkPreview", skip_serializing_if = "Option::is_none")]
    link_preview: Option<bool>,
}

/// Message facade
pub struct MessagesApi {
    client: WahaClient,
}

impl MessagesApi {
    pub fn new(client: WahaClient) -> Self {
        Self { client }
    }

    fn message_path(session: &str, chat_id: &str, message_id: &str) -> String {
        format!(
            "/api/{}/chats/{}/messages/{}",
            encode_path_segment(session),
            encode_path_segment(chat_id),
            encode_path_segment(message_id)
        )
    }

    /// Send a text message
    ///
    /// `POST /api/sendText`
    pub async fn send_text(
        &self,
        session: &str,
        chat_id: &str,
        text: &str,
        options: &SendTextOptions,
    ) -> Result<Value, WahaError> {
        let body = SendTextRequest {
            session,
            chat_id,
            text,
            options,
        };
        self.client.post("/api/sendText", &body).await?.into_json()
    }

    /// Mark message(s) as seen
    ///
    /// `POST /api/sendSeen`
    pub async fn send_seen(
        &self,
        session: &str,
        chat_id: &str,
        options: &SendSeenOptions,
    ) -> Result<Value, WahaError> {
        let body = SendSeenRequest {
            session,
            chat_id,
            options,
        };
        self.client.post("/api/sendSeen", &body).await?.into_json()
    }

    /// Send an image
    ///
    /// `POST /api/sendImage`. A path input defaults to `image/jpeg`.
    pub async fn send_image(
        &self,
        session: &str,
        chat_id: &str,
        file: impl Into<FileInput>,
        caption: Option<&str>,
    ) -> Result<Value, WahaError> {
        let file = file.into().into_payload("image/jpeg").await?;
        let body = SendMediaRequest {
            session,
            chat_id,
            file,
            caption,
            convert: None,
        };
        self.client.post("/api/sendImage", &body).await?.into_json()
    }

    /// Send a video
    ///
    /// `POST /api/sendVideo`. A path input defaults to `video/mp4`.
    pub async fn send_video(
        &self,
        session: &str,
        chat_id: &str,
        file: impl Into<FileInput>,
        options: &SendVideoOptions,
    ) -> Result<Value, WahaError> {
        let file = file.into().into_payload("video/mp4").await?;
        let body = SendVideoRequest {
            session,
            chat_id,
            file,
            options,
        };
        self.client.post("/api/sendVideo", &body).await?.into_json()
    }

    /// Send a voice note
    ///
    /// `POST /api/sendVoice`. A path input defaults to
    /// `audio/ogg; codecs=opus`.
    pub async fn send_voice(
        &self,
        session: &str,
        chat_id: &str,
        file: impl Into<FileInput>,
        convert: bool,
    ) -> Result<Value, WahaError> {
        let file = file.into().into_payload("audio/ogg; codecs=opus").await?;
        let body = SendMediaRequest {
            session,
            chat_id,
            file,
            caption: None,
            convert: convert.then_some(true),
        };
        self.client.post("/api/sendVoice", &body).await?.into_json()
    }

    /// Send a document
    ///
    /// `POST /api/sendFile`. A path input defaults to
    /// `application/octet-stream`.
    pub async fn send_file(
        &self,
        session: &str,
        chat_id: &str,
        file: impl Into<FileInput>,
        caption: Option<&str>,
    ) -> Result<Value, WahaError> {
        let file = file.into().into_payload("application/octet-stream").await?;
        let body = SendMediaRequest {
            session,
            chat_id,
            file,
            caption,
            convert: None,
        };
        self.client.post("/api/sendFile", &body).await?.into_json()
    }

    /// Send a location
    ///
    /// `POST /api/sendLocation`
    pub async fn send_location(
        &self,
        session: &str,
        chat_id: &str,
        latitude: f64,
        longitude: f64,
        title: Option<&str>,
    ) -> Result<Value, WahaError> {
        let body = SendLocationRequest {
            session,
            chat_id,
            latitude,
            longitude,
            title,
        };
        self.client
            .post("/api/sendLocation", &body)
            .await?
            .into_json()
    }

    /// Send contact vCard(s)
    ///
    /// `POST /api/sendContactVcard`
    pub async fn send_contact_vcard(
        &self,
        session: &str,
        chat_id: &str,
        contacts: &[Value],
    ) -> Result<Value, WahaError> {
        let body = SendContactsRequest {
            session,
            chat_id,
            contacts,
        };
        self.client
            .post("/api/sendContactVcard", &body)
            .await?
            .into_json()
    }

    /// Send a poll
    ///
    /// `POST /api/sendPoll`
    pub async fn send_poll(
        &self,
        session: &str,
        chat_id: &str,
        poll: &Value,
    ) -> Result<Value, WahaError> {
        let body = SendPollRequest {
            session,
            chat_id,
            poll,
        };
        self.client.post("/api/sendPoll", &body).await?.into_json()
    }

    /// Forward a message to another chat
    ///
    /// `POST /api/forwardMessage`
    pub async fn forward_message(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
    ) -> Result<Value, WahaError> {
        let body = ForwardMessageRequest {
            session,
            chat_id,
            message_id,
        };
        self.client
            .post("/api/forwardMessage", &body)
            .await?
            .into_json()
    }

    /// React to a message (empty string removes the reaction)
    ///
    /// `PUT /api/reaction`
    pub async fn add_reaction(
        &self,
        session: &str,
        message_id: &str,
        reaction: &str,
    ) -> Result<Value, WahaError> {
        let body = ReactionRequest {
            session,
            message_id,
            reaction,
        };
        self.client.put("/api/reaction", &body).await?.into_json()
    }

    /// Star or unstar a message
    ///
    /// `PUT /api/star`
    pub async fn star_message(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
        star: bool,
    ) -> Result<Value, WahaError> {
        let body = StarRequest {
            session,
            chat_id,
            message_id,
            star,
        };
        self.client.put("/api/star", &body).await?.into_json()
    }

    /// Edit a sent message
    ///
    /// `PUT /api/{session}/chats/{chatId}/messages/{messageId}`
    pub async fn edit_message(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
        text: &str,
        link_preview: Option<bool>,
    ) -> Result<Value, WahaError> {
        let path = Self::message_path(session, chat_id, message_id);
        let body = EditMessageRequest { text, link_preview };
        self.client.put(&path, &body).await?.into_json()
    }

    /// Delete a message
    ///
    /// `DELETE /api/{session}/chats/{chatId}/messages/{messageId}`
    pub async fn delete_message(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
    ) -> Result<Value, WahaError> {
        let path = Self::message_path(session, chat_id, message_id);
        self.client.delete(&path).await?.into_json()
    }

    /// Pin a message in a chat
    ///
    /// `POST /api/{session}/chats/{chatId}/messages/{messageId}/pin`
    pub async fn pin_message(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
    ) -> Result<Value, WahaError> {
        let path = format!("{}/pin", Self::message_path(session, chat_id, message_id));
        self.client.post_empty(&path).await?.into_json()
    }

    /// Unpin a message in a chat
    ///
    /// `POST /api/{session}/chats/{chatId}/messages/{messageId}/unpin`
    pub async fn unpin_message(
        &self,
        session: &str,
        chat_id: &str,
        message_id: &str,
    ) -> Result<Value, WahaError> {
        let path = format!("{}/unpin", Self::message_path(session, chat_id, message_id));
        self.client.post_empty(&path).await?.into_json()
    }
}
