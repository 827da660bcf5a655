//! Gemini `generateContent` data transfer objects.

use serde::{Deserialize, Serialize};

/// Request body for the `models/{model}:generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Ordered prompt contents
    pub contents: Vec<Content>,
    /// Sampling and output-shape configuration
    #[serde(
        rename = "generationConfig",
        skip_serializing_if = "Option::is_none"
    )]
    pub generation_config: Option<GenerationConfig>,
}

/// A content block holding ordered parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Ordered parts of this content block
    pub parts: Vec<Part>,
}

/// One part of a content block.
///
/// Serializes to the wire shapes `{"text": "..."}` and
/// `{"inlineData": {"mimeType": "...", "data": "..."}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Part {
    /// Plain text
    #[serde(rename = "text")]
    Text(String),
    /// Inline base64 attachment
    #[serde(rename = "inlineData")]
    InlineData(InlineData),
}

/// Inline base64 attachment data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the attachment
    pub mime_type: String,
    /// Base64-encoded payload
    pub data: String,
}

/// Generation configuration forwarded with the request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    /// `application/json` when a response schema is requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// JSON schema the response must honor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

/// Response body of the `generateContent` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content; may be absent when the candidate was blocked
    pub content: Option<Content>,
}
