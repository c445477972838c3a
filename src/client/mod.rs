//! WAHA HTTP Client module
//!
//! This module contains the WahaClient and related types.

mod waha_client;
pub use waha_client::{Payload, WahaClient};

mod builder;
pub use builder::WahaClientBuilder;
