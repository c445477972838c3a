//! Group management API

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::{Payload, WahaClient};
use crate::error::WahaError;
use crate::utils::encode_path_segment;

#[derive(Serialize)]
struct CreateGroupRequest<'a> {
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    participants: Option<&'a [String]>,
}

#[derive(Serialize)]
struct SubjectRequest<'a> {
    subject: &'a str,
}

#[derive(Serialize)]
struct DescriptionRequest<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct ParticipantsRequest<'a> {
    participants: &'a [String],
}

/// Group facade
pub struct GroupsApi {
    client: WahaClient,
}

impl GroupsApi {
    pub fn new(client: WahaClient) -> Self {
        Self { client }
    }

    fn group_path(session: &str, group_id: &str) -> String {
        format!(
            "/api/{}/groups/{}",
            encode_path_segment(session),
            encode_path_segment(group_id)
        )
    }

    /// `GET /api/{session}/groups`
    pub async fn list(&self, session: &str) -> Result<Value, WahaError> {
        let path = format!("/api/{}/groups", encode_path_segment(session));
        self.client.get(&path, &[]).await?.into_json()
    }

    /// `GET /api/{session}/groups/count`
    pub async fn count(&self, session: &str) -> Result<Value, WahaError> {
        let path = format!("/api/{}/groups/count", encode_path_segment(session));
        self.client.get(&path, &[]).await?.into_json()
    }

    /// `GET /api/{session}/groups/{groupId}`
    pub async fn get(&self, session: &str, group_id: &str) -> Result<Value, WahaError> {
        let path = Self::group_path(session, group_id);
        self.client.get(&path, &[]).await?.into_json()
    }

    /// Create a group
    ///
    /// `POST /api/{session}/groups`
    pub async fn create(
        &self,
        session: &str,
        subject: &str,
        participants: Option<&[String]>,
    ) -> Result<Value, WahaError> {
        let path = format!("/api/{}/groups", encode_path_segment(session));
        let body = CreateGroupRequest {
            subject,
            participants,
        };
        self.client.post(&path, &body).await?.into_json()
    }

    /// `POST /api/{session}/groups/{groupId}/leave`
    pub async fn leave(&self, session: &str, group_id: &str) -> Result<Value, WahaError> {
        let path = format!("{}/leave", Self::group_path(session, group_id));
        self.client.post_empty(&path).await?.into_json()
    }

    /// Rename a group
    ///
    /// `PUT /api/{session}/groups/{groupId}/subject`
    pub async fn set_subject(
        &self,
        session: &str,
        group_id: &str,
        subject: &str,
    ) -> Result<Value, WahaError> {
        let path = format!("{}/subject", Self::group_path(session, group_id));
        self.client
            .put(&path, &SubjectRequest { subject })
            .await?
            .into_json()
    }

    /// `PUT /api/{session}/groups/{groupId}/description`
    pub async fn set_description(
        &self,
        session: &str,
        group_id: &str,
        description: &str,
    ) -> Result<Value, WahaError> {
        let path = format!("{}/description", Self::group_path(session, group_id));
        self.client
            .put(&path, &DescriptionRequest { description })
            .await?
            .into_json()
    }

    /// `GET /api/{session}/groups/{groupId}/invite-code`
    pub async fn invite_code(&self, session: &str, group_id: &str) -> Result<Value, WahaError> {
        let path = format!("{}/invite-code", Self::group_path(session, group_id));
        self.client.get(&path, &[]).await?.into_json()
    }

    /// `POST /api/{session}/groups/{groupId}/invite-code/revoke`
    pub async fn revoke_invite_code(
        &self,
        session: &str,
        group_id: &str,
    ) -> Result<Value, WahaError> {
        let path = format!("{}/invite-code/revoke", Self::group_path(session, group_id));
        self.client.post_empty(&path).await?.into_json()
    }

    /// Group picture
    ///
    /// `GET /api/{session}/groups/{groupId}/picture`. With `accept_json`
    /// the request asks for the base64 JSON rendition instead of image
    /// bytes.
    pub async fn picture(
        &self,
        session: &str,
        group_id: &str,
        accept_json: bool,
    ) -> Result<Payload, WahaError> {
        let path = format!("{}/picture", Self::group_path(session, group_id));
        let accept = if accept_json {
            "application/json"
        } else {
            "image/png"
        };
        self.client
            .request_with_accept(Method::GET, &path, &[], None::<&Value>, Some(accept))
            .await
    }

    /// `GET /api/{session}/groups/{groupId}/participants`
    pub async fn participants(&self, session: &str, group_id: &str) -> Result<Value, WahaError> {
        let path = format!("{}/participants", Self::group_path(session, group_id));
        self.client.get(&path, &[]).await?.into_json()
    }

    /// `POST /api/{session}/groups/{groupId}/participants/add`
    pub async fn add_participants(
        &self,
        session: &str,
        group_id: &str,
        participants: &[String],
    ) -> Result<Value, WahaError> {
        let path = format!("{}/participants/add", Self::group_path(session, group_id));
        self.client
            .post(&path, &ParticipantsRequest { participants })
            .await?
            .into_json()
    }

    /// `POST /api/{session}/groups/{groupId}/participants/remove`
    pub async fn remove_participants(
        &self,
        session: &str,
        group_id: &str,
        participants: &[String],
    ) -> Result<Value, WahaError> {
        let path = format!(
            "{}/participants/remove",
            Self::group_path(session, group_id)
        );
        self.client
            .post(&path, &ParticipantsRequest { participants })
            .await?
            .into_json()
    }

    /// `POST /api/{session}/groups/{groupId}/admin/promote`
    pub async fn promote_admin(
        &self,
        session: &str,
        group_id: &str,
        participants: &[String],
    ) -> Result<Value, WahaError> {
        let path = format!("{}/admin/promote", Self::group_path(session, group_id));
        self.client
            .post(&path, &ParticipantsRequest { participants })
            .await?
            .into_json()
    }

    /// `POST /api/{session}/groups/{groupId}/admin/demote`
    pub async fn demote_admin(
        &self,
        session: &str,
        group_id: &str,
        participants: &[String],
    ) -> Result<Value, WahaError> {
        let path = format!("{}/admin/demote", Self::group_path(session, group_id));
        self.client
            .post(&path, &ParticipantsRequest { participants })
            .await?
            .into_json()
    }
}
