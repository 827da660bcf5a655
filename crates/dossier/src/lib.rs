//! Dossier: throttled, serialized LLM call dispatch for document-analysis
//! workflows.
//!
//! The application-facing surface is small: build a [`CallDispatcher`] over
//! a generation backend and feed it [`GenerateRequest`]s. Requests execute
//! one at a time, in submission order, with a minimum spacing between call
//! starts, and each request's failure stays local to its own caller.
//!
//! ```rust,ignore
//! use dossier::{DispatchSettings, GenerateRequest, gemini_dispatcher};
//!
//! let settings = DispatchSettings::default();
//! let dispatcher = gemini_dispatcher(&settings)?;
//!
//! let summary = dispatcher
//!     .submit(GenerateRequest::text("Summarize the attached statement."))
//!     .await?;
//! ```

mod config;

pub use config::DispatchSettings;
pub use dossier_core::{GenerateRequest, Input, MediaSource, SamplingOptions};
pub use dossier_dispatch::{CallDispatcher, DispatcherConfig, GenerationBackend};
pub use dossier_error::{
    ConfigError, DossierError, DossierErrorKind, DossierResult, GeminiError, GeminiErrorKind,
    GenerationError, GenerationErrorKind, ValidationError,
};
pub use dossier_models::GeminiClient;

/// Builds a Gemini-backed dispatcher from settings and the environment.
///
/// Loads a `.env` file when present, then reads the API key from
/// `GEMINI_API_KEY`. Must be called within a Tokio runtime, as the
/// dispatcher spawns its worker task immediately.
///
/// # Errors
///
/// Returns an error when the API key is missing from the environment.
pub fn gemini_dispatcher(settings: &DispatchSettings) -> DossierResult<CallDispatcher> {
    dotenvy::dotenv().ok();
    let client = GeminiClient::from_env(settings.model())?;
    Ok(CallDispatcher::new(client, settings.dispatcher_config()))
}
