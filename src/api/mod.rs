//! WAHA API modules
//!
//! One facade per resource area of the gateway's REST surface:
//!
//! - [`sessions`] - Session lifecycle, pairing (QR / code), screenshots
//! - [`messages`] - Sending text, media, locations, polls; message actions
//! - [`chats`] - Chat listing, archiving, message history
//! - [`contacts`] - Contact lookup, profile pictures, block lists
//! - [`groups`] - Group management and participants
//! - [`status`] - Status (stories) publishing
//! - [`profile`] - Own profile helpers
//! - [`channels`] - WhatsApp Channels
//!
//! Each facade holds a cheap clone of the shared [`WahaClient`](crate::WahaClient)
//! and only assembles paths, query parameters, and bodies before delegating
//! to the dispatcher. Responses are passed through as opaque
//! [`serde_json::Value`] payloads; the facades never interpret them.

pub mod channels;
pub mod chats;
pub mod contacts;
pub mod groups;
pub mod messages;
pub mod profile;
pub mod sessions;
pub mod status;

pub use channels::ChannelsApi;
pub use chats::ChatsApi;
pub use contacts::{ContactsApi, ListContactsOptions};
pub use groups::GroupsApi;
pub use messages::{MessagesApi, SendSeenOptions, SendTextOptions, SendVideoOptions};
pub use profile::ProfileApi;
pub use sessions::{CreateSessionOptions, QrFormat, SessionsApi};
pub use status::StatusApi;
