//! WAHA (WhatsApp HTTP API) SDK for Rust
//!
//! A typed async client for a WAHA gateway server, covering the session,
//! message, chat, contact, group, status, profile, and channel routes.
//!
//! The SDK is a thin marshaling layer: facade methods assemble paths, query
//! parameters, and JSON bodies, and a single dispatcher issues the HTTP
//! call and classifies the response. Domain payloads are returned as opaque
//! [`serde_json::Value`]s exactly as the gateway sent them.
//!
//! ## API Coverage
//!
//! | Resource | Methods |
//! |----------|---------|
//! | Sessions | 13 |
//! | Messages | 16 |
//! | Chats | 10 |
//! | Contacts | 8 |
//! | Groups | 15 |
//! | Status | 6 |
//! | Profile | 1 |
//! | Channels | 5 |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waha_sdk::{WahaClient, types::ApiKey};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WahaClient::builder()
//!         .base_url("http://localhost:3000")
//!         .api_key(ApiKey::new("your-api-key")?)
//!         .build()?;
//!
//!     // Send a text message
//!     let result = client
//!         .messages()
//!         .send_text("default", "1234567890@c.us", "Hello, World!", &Default::default())
//!         .await?;
//!     println!("{result}");
//!
//!     // List sessions
//!     let sessions = client.sessions().list(false).await?;
//!     println!("{sessions}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Resource facades (sessions, messages, chats, …)
//! - [`client`] - HTTP dispatcher and builder
//! - [`error`] - Error types
//! - [`middleware`] - Tower-based request middleware (logging)
//! - [`types`] - API key and attachment payload types
//!
//! ## Error Handling
//!
//! Every failure is a [`WahaError`]. HTTP error statuses map to dedicated
//! variants; failures with no HTTP response at all are
//! [`WahaError::Transport`]:
//!
//! ```rust,ignore
//! use waha_sdk::WahaError;
//!
//! match result {
//!     Ok(value) => { /* handle payload */ }
//!     Err(WahaError::NotFound(_)) => { /* session does not exist */ }
//!     Err(WahaError::Server { status, message }) => {
//!         eprintln!("gateway error {status}: {message}");
//!     }
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```
//!
//! No call is ever retried by this crate; retry policy belongs to the
//! caller.

pub mod api;
pub mod client;
pub mod error;
pub mod middleware;
pub mod types;
mod utils;

pub use client::{Payload, WahaClient, WahaClientBuilder};
pub use error::WahaError;
