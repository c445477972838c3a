//! Middleware components for the WAHA SDK.
//!
//! Cross-cutting concerns are composed with Tower layers over the client.
//! The SDK ships a single layer, [`LoggingMiddleware`]; callers can stack
//! their own via `ServiceBuilder`.
//!
//! ## Usage
//!
//! ```ignore
//! use waha_sdk::middleware::LoggingMiddleware;
//!
//! let client = WahaClient::builder()
//!     .with_middleware(LoggingMiddleware::new())
//!     .build()?;
//! ```

// Re-export tower types for convenience
pub use tower::{Layer, Service, ServiceBuilder};

mod logging;

pub use logging::LoggingMiddleware;
