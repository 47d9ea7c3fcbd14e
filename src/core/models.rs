//! Core data models for the Transfluent API

use std::fmt;
use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::core::errors::{Result, TransfluentError};

/// Error object inside the service's `ERROR` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteErrorBody {
    /// Machine-readable error code
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

/// Body shape of a non-200 response
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    /// The error object; the `status` field is ignored
    pub error: RemoteErrorBody,
}

/// Successful result of a single API call.
///
/// On 200 the body is either the service's JSON envelope, in which case the
/// envelope's `response` field is returned, or raw non-JSON content such as a
/// translated file download, which is passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The `response` field of a decoded JSON envelope; any JSON type
    Json(Value),
    /// Raw body bytes of a non-JSON 200 response
    Raw(Vec<u8>),
}

impl Payload {
    /// Unwrap the JSON variant, failing on raw pass-through content
    pub fn into_json(self) -> Result<Value> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Raw(_) => Err(TransfluentError::InvalidResponse {
                message: "expected a JSON envelope, got raw content".to_string(),
            }),
        }
    }

    /// Borrow the JSON value if this is the JSON variant
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Raw(_) => None,
        }
    }

    /// Borrow the raw bytes if this is the pass-through variant
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Payload::Json(_) => None,
            Payload::Raw(bytes) => Some(bytes),
        }
    }
}

/// Content handed to `file_save`.
///
/// The caller picks the variant explicitly: in-memory bytes, or a reader that
/// is consumed fully before upload.
pub enum FileSource {
    /// Content already in memory
    Bytes(Vec<u8>),
    /// Readable source, drained to the end when the request is built
    Reader(Box<dyn Read + Send>),
}

impl FileSource {
    /// Resolve the source to its full byte content
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            FileSource::Bytes(bytes) => Ok(bytes),
            FileSource::Reader(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSource::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            FileSource::Reader(_) => f.debug_tuple("Reader").finish(),
        }
    }
}

impl From<Vec<u8>> for FileSource {
    fn from(bytes: Vec<u8>) -> Self {
        FileSource::Bytes(bytes)
    }
}

impl From<&[u8]> for FileSource {
    fn from(bytes: &[u8]) -> Self {
        FileSource::Bytes(bytes.to_vec())
    }
}

impl From<String> for FileSource {
    fn from(text: String) -> Self {
        FileSource::Bytes(text.into_bytes())
    }
}

impl From<&str> for FileSource {
    fn from(text: &str) -> Self {
        FileSource::Bytes(text.as_bytes().to_vec())
    }
}

impl From<std::fs::File> for FileSource {
    fn from(file: std::fs::File) -> Self {
        FileSource::Reader(Box::new(file))
    }
}

/// Options for `file_save`
#[derive(Debug, Clone)]
pub struct FileSaveOptions {
    /// Content encoding label sent to the service
    pub format: String,
    /// Store the file without ordering a translation
    pub save_only_data: bool,
}

impl Default for FileSaveOptions {
    fn default() -> Self {
        Self {
            format: "UTF-8".to_string(),
            save_only_data: false,
        }
    }
}

impl FileSaveOptions {
    /// Set the content format label
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Set the save-only-data flag
    pub fn with_save_only_data(mut self, save_only_data: bool) -> Self {
        self.save_only_data = save_only_data;
        self
    }
}

/// Options shared by the translation-ordering operations
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Quality level requested from the service
    pub level: u32,
    /// Free-form comment for the translators
    pub comment: String,
    /// URL called by the service when the order completes
    pub callback_url: String,
    /// Word cap for text-group orders; ignored by `file_translate`
    pub max_words: usize,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            level: 3,
            comment: String::new(),
            callback_url: String::new(),
            max_words: 1000,
        }
    }
}

impl TranslateOptions {
    /// Set the quality level
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the translator comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the completion callback URL
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = callback_url.into();
        self
    }

    /// Set the word cap for text-group orders
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }
}
