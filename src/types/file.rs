//! Attachment payloads
//!
//! WAHA carries binary attachments inline in JSON request bodies as base64
//! data plus a mimetype and filename. Facade methods accept either a
//! pre-built [`FilePayload`] or a local file path; paths are read and
//! encoded on the caller's behalf.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::WahaError;

/// An attachment as the gateway expects it on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    /// Base64-encoded file contents (standard alphabet, no line wrapping).
    pub data: String,
    /// MIME type, e.g. `image/jpeg`.
    pub mimetype: String,
    /// Original filename shown to the recipient.
    pub filename: String,
}

impl FilePayload {
    pub fn new(
        data: impl Into<String>,
        mimetype: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            data: data.into(),
            mimetype: mimetype.into(),
            filename: filename.into(),
        }
    }

    /// Read a local file and wrap it as a payload with the given MIME type.
    pub async fn from_path(path: &Path, mimetype: &str) -> Result<Self, WahaError> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self {
            data: BASE64.encode(bytes),
            mimetype: mimetype.to_string(),
            filename: path.to_string_lossy().into_owned(),
        })
    }
}

/// Attachment argument accepted by the sending methods.
///
/// Either a ready-made [`FilePayload`] or a local path to be read and
/// base64-encoded. When a path is given, the sending method supplies its
/// default MIME type (`image/jpeg` for images, `video/mp4` for videos,
/// `audio/ogg; codecs=opus` for voice notes, `application/octet-stream`
/// for documents).
#[derive(Debug, Clone)]
pub enum FileInput {
    Payload(FilePayload),
    Path(PathBuf),
}

impl FileInput {
    pub(crate) async fn into_payload(self, default_mimetype: &str) -> Result<FilePayload, WahaError> {
        match self {
            FileInput::Payload(payload) => Ok(payload),
            FileInput::Path(path) => FilePayload::from_path(&path, default_mimetype).await,
        }
    }
}

impl From<FilePayload> for FileInput {
    fn from(payload: FilePayload) -> Self {
        FileInput::Payload(payload)
    }
}

impl From<PathBuf> for FileInput {
    fn from(path: PathBuf) -> Self {
        FileInput::Path(path)
    }
}

impl From<&Path> for FileInput {
    fn from(path: &Path) -> Self {
        FileInput::Path(path.to_path_buf())
    }
}

impl From<&str> for FileInput {
    fn from(path: &str) -> Self {
        FileInput::Path(PathBuf::from(path))
    }
}
