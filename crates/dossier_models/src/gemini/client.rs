//! HTTP client for the Gemini `generateContent` API.

use crate::gemini::conversions;
use crate::gemini::dto::GenerateContentResponse;
use async_trait::async_trait;
use dossier_core::GenerateRequest;
use dossier_dispatch::GenerationBackend;
use dossier_error::{GeminiError, GeminiErrorKind, GenerationError};
use reqwest::Client;
use tracing::{debug, error, instrument};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini REST API.
///
/// Implements [`GenerationBackend`], so it plugs directly into a
/// `CallDispatcher`. The client itself performs no throttling; the
/// dispatcher owns call spacing.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini client for the given model.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn new(api_key: String, model: String) -> Self {
        debug!(model = %model, "Created Gemini client");

        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when the variable is unset.
    pub fn from_env(model: impl Into<String>) -> Result<Self, GeminiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::new(api_key, model.into()))
    }

    /// Overrides the API base URL (test servers, regional endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Generates text for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-success
    /// status, or the response carries no candidate text.
    #[instrument(skip(self, req), fields(model = %self.model))]
    pub async fn generate(&self, req: &GenerateRequest) -> Result<String, GeminiError> {
        let wire_request = conversions::to_wire_request(req);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(
            model = %self.model,
            parts = req.inputs.len(),
            structured = req.output_schema.is_some(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                error!(model = %self.model, error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                model = %self.model,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(model = %self.model, error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
        })?;

        let text = conversions::text_from_response(&body)?;
        debug!(model = %self.model, chars = text.len(), "Received response");

        Ok(text)
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerationError> {
        GeminiClient::generate(self, request)
            .await
            .map_err(GenerationError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_endpoint() {
        let client = GeminiClient::new("secret-key".to_string(), "gemini-2.5-flash".to_string());
        assert_eq!(client.model_name(), "gemini-2.5-flash");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let client = GeminiClient::new("key".to_string(), "gemini-2.5-flash".to_string())
            .with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
