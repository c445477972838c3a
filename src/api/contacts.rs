//! Contact management API
//!
//! Unlike chats and groups, most contact routes take the session as a query
//! parameter rather than a path segment; that shape is the gateway's
//! contract and is preserved here.

use serde::Serialize;
use serde_json::Value;

use crate::client::WahaClient;
use crate::error::WahaError;
use crate::utils::encode_path_segment;

/// Optional fields for [`ContactsApi::list_all`].
#[derive(Debug, Clone, Default)]
pub struct ListContactsOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateContactRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
}

#[derive(Serialize)]
struct BlockRequest<'a> {
    session: &'a str,
    #[serde(rename = "chatId")]
    chat_id: &'a str,
}

/// Contact facade
pub struct ContactsApi {
    client: WahaClient,
}

impl ContactsApi {
    pub fn new(client: WahaClient) -> Self {
        Self { client }
    }

    /// List all contacts
    ///
    /// `GET /api/contacts/all`
    pub async fn list_all(
        &self,
        session: &str,
        options: &ListContactsOptions,
    ) -> Result<Value, WahaError> {
        let mut query: Vec<(&str, String)> = vec![("session", session.to_string())];
        if let Some(limit) = options.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = options.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(sort_by) = &options.sort_by {
            query.push(("sortBy", sort_by.clone()));
        }
        if let Some(sort_order) = &options.sort_order {
            query.push(("sortOrder", sort_order.clone()));
        }
        self.client.get("/api/contacts/all", &query).await?.into_json()
    }

    /// Get one contact
    ///
    /// `GET /api/contacts?session={session}&contactId={id}`
    pub async fn get(&self, session: &str, contact_id: &str) -> Result<Value, WahaError> {
        let query = [
            ("session", session.to_string()),
            ("contactId", contact_id.to_string()),
        ];
        self.client.get("/api/contacts", &query).await?.into_json()
    }

    /// Update a contact's name
    ///
    /// `PUT /api/{session}/contacts/{chatId}`
    pub async fn update(
        &self,
        session: &str,
        chat_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Value, WahaError> {
        let path = format!(
            "/api/{}/contacts/{}",
            encode_path_segment(session),
            encode_path_segment(chat_id)
        );
        let body = UpdateContactRequest {
            first_name,
            last_name,
        };
        self.client.put(&path, &body).await?.into_json()
    }

    /// Check whether a phone number is on WhatsApp
    ///
    /// `GET /api/contacts/check-exists`
    pub async fn check_exists(&self, session: &str, phone: &str) -> Result<Value, WahaError> {
        let query = [
            ("session", session.to_string()),
            ("phone", phone.to_string()),
        ];
        self.client
            .get("/api/contacts/check-exists", &query)
            .await?
            .into_json()
    }

    /// A contact's "about" text
    ///
    /// `GET /api/contacts/about`
    pub async fn about(&self, session: &str, contact_id: &str) -> Result<Value, WahaError> {
        let query = [
            ("session", session.to_string()),
            ("contactId", contact_id.to_string()),
        ];
        self.client
            .get("/api/contacts/about", &query)
            .await?
            .into_json()
    }

    /// A contact's profile picture URL
    ///
    /// `GET /api/contacts/profile-picture`. With `refresh` the gateway
    /// bypasses its cache.
    pub async fn profile_picture(
        &self,
        session: &str,
        contact_id: &str,
        refresh: bool,
    ) -> Result<Value, WahaError> {
        let mut query: Vec<(&str, String)> = vec![
            ("session", session.to_string()),
            ("contactId", contact_id.to_string()),
        ];
        if refresh {
            query.push(("refresh", "true".to_string()));
        }
        self.client
            .get("/api/contacts/profile-picture", &query)
            .await?
            .into_json()
    }

    /// Block a contact
    ///
    /// `POST /api/contacts/block`
    pub async fn block(&self, session: &str, chat_id: &str) -> Result<Value, WahaError> {
        let body = BlockRequest { session, chat_id };
        self.client
            .post("/api/contacts/block", &body)
            .await?
            .into_json()
    }

    /// Unblock a contact
    ///
    /// `POST /api/contacts/unblock`
    pub async fn unblock(&self, session: &str, chat_id: &str) -> Result<Value, WahaError> {
        let body = BlockRequest { session, chat_id };
        self.client
            .post("/api/contacts/unblock", &body)
            .await?
            .into_json()
    }
}
