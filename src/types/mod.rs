//! Type definitions for WAHA API entities

mod file;
mod ids;

pub use file::{FileInput, FilePayload};
pub use ids::ApiKey;
