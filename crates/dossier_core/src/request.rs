//! Request types for LLM generation.

use crate::{Input, SamplingOptions};
use dossier_error::ValidationError;
use serde::{Deserialize, Serialize};

/// One pending invocation of a generation backend (multimodal-safe).
///
/// The payload is opaque to the dispatcher: ordered prompt parts, an
/// optional structural constraint on the output, and sampling options
/// forwarded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// Ordered prompt parts
    pub inputs: Vec<Input>,
    /// Optional JSON schema the backend should honor; `None` means free-form text
    pub output_schema: Option<serde_json::Value>,
    /// Sampling parameters forwarded verbatim
    pub sampling: SamplingOptions,
}

impl GenerateRequest {
    /// Creates a plain-text request with default sampling.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            inputs: vec![Input::Text(prompt.into())],
            output_schema: None,
            sampling: SamplingOptions::default(),
        }
    }

    /// Creates a request from an ordered sequence of parts.
    pub fn parts(inputs: Vec<Input>) -> Self {
        Self {
            inputs,
            output_schema: None,
            sampling: SamplingOptions::default(),
        }
    }

    /// Requests structured JSON output matching the given schema.
    pub fn with_output_schema(mut self, schema: serde_json::Value) -> Self {
        self.output_schema = Some(schema);
        self
    }

    /// Overrides the default sampling options.
    pub fn with_sampling(mut self, sampling: SamplingOptions) -> Self {
        self.sampling = sampling;
        self
    }

    /// Checks that the payload carries non-empty content.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the part list is empty or every
    /// part is empty text. Rejected requests never reach a backend.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.inputs.is_empty() {
            return Err(ValidationError::new("prompt contains no parts"));
        }

        if !self.inputs.iter().any(Input::has_content) {
            return Err(ValidationError::new("prompt parts are all empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediaSource;

    #[test]
    fn test_text_request_validates() {
        assert!(GenerateRequest::text("hello").validate().is_ok());
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert!(GenerateRequest::text("").validate().is_err());
        assert!(GenerateRequest::text("   \n\t").validate().is_err());
        assert!(GenerateRequest::parts(vec![]).validate().is_err());
    }

    #[test]
    fn test_binary_part_counts_as_content() {
        let request = GenerateRequest::parts(vec![
            Input::Text(String::new()),
            Input::Document {
                mime: Some("application/pdf".to_string()),
                source: MediaSource::Base64("JVBERi0=".to_string()),
                filename: None,
            },
        ]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_builder_style_modifiers() {
        let request = GenerateRequest::text("classify this")
            .with_output_schema(serde_json::json!({"type": "object"}))
            .with_sampling(SamplingOptions {
                temperature: 0.7,
                top_p: 0.9,
            });

        assert!(request.output_schema.is_some());
        assert_eq!(request.sampling.temperature, 0.7);
    }

    #[test]
    fn test_default_sampling_matches_application_defaults() {
        let sampling = SamplingOptions::default();
        assert_eq!(sampling.temperature, 0.3);
        assert_eq!(sampling.top_p, 0.95);
    }
}
