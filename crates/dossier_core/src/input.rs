//! Input types for generation requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// One ordered part of a prompt.
///
/// A prompt is either a single text part or a mixed sequence of text and
/// binary-attachment parts, forwarded to the backend in submission order.
///
/// # Examples
///
/// ```
/// use dossier_core::{Input, MediaSource};
///
/// // Text input
/// let text = Input::Text("Summarize this document.".to_string());
///
/// // Document input with base64 payload
/// let doc = Input::Document {
///     mime: Some("application/pdf".to_string()),
///     source: MediaSource::Base64("JVBERi0xLj...".to_string()),
///     filename: Some("statement.pdf".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, etc.).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (base64 or raw bytes)
        source: MediaSource,
    },

    /// Document input (PDF, DOCX, TXT, etc.).
    Document {
        /// MIME type, e.g., "application/pdf" or "text/plain"
        mime: Option<String>,
        /// Media source (base64 or raw bytes)
        source: MediaSource,
        /// Optional filename for context
        filename: Option<String>,
    },
}

impl Input {
    /// True when this part carries content worth sending to a backend.
    ///
    /// Binary parts always count; a text part counts unless it is empty
    /// or whitespace-only.
    pub fn has_content(&self) -> bool {
        match self {
            Input::Text(text) => !text.trim().is_empty(),
            _ => true,
        }
    }
}
