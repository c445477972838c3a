use thiserror::Error;

/// WAHA SDK error types
///
/// Every failure produced by this crate is a [`WahaError`]. HTTP responses
/// the gateway answered with an error status map to the status-keyed
/// variants; failures where no response was received at all (DNS, refused
/// connection, timeout) map to [`WahaError::Transport`].
#[derive(Debug, Error)]
pub enum WahaError {
    /// No HTTP response was received (connection, DNS, or timeout failure).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered 401.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The gateway answered 404.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The gateway answered 429.
    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    /// The gateway answered with a 5xx status.
    #[error("{message} (Status: {status})")]
    Server { status: u16, message: String },

    /// The gateway answered with any other 4xx status.
    #[error("{message} (Status: {status})")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl WahaError {
    /// The HTTP status code behind this error, when one applies.
    pub fn status(&self) -> Option<u16> {
        match self {
            WahaError::Authentication(_) => Some(401),
            WahaError::NotFound(_) => Some(404),
            WahaError::RateLimit(_) => Some(429),
            WahaError::Server { status, .. } | WahaError::Api { status, .. } => Some(*status),
            WahaError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_includes_status() {
        let err = WahaError::Server {
            status: 500,
            message: "db down".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("db down"));
        assert!(text.contains("500"));
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(WahaError::Authentication("x".into()).status(), Some(401));
        assert_eq!(WahaError::NotFound("x".into()).status(), Some(404));
        assert_eq!(WahaError::RateLimit("x".into()).status(), Some(429));
        assert_eq!(
            WahaError::Api {
                status: 403,
                message: "forbidden".into()
            }
            .status(),
            Some(403)
        );
        assert_eq!(WahaError::Config("bad".into()).status(), None);
    }
}
