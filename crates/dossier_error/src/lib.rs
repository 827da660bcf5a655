//! Error types for the Dossier LLM dispatch library.
//!
//! This crate provides the foundation error types used throughout the Dossier ecosystem.

mod config;
mod gemini;
mod generation;
mod validation;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use validation::ValidationError;

/// Error kinds aggregated across the Dossier crates.
#[derive(Debug, derive_more::From)]
pub enum DossierErrorKind {
    /// Request payload rejected before enqueue
    Validation(ValidationError),
    /// Backend generation failure
    Generation(GenerationError),
    /// Gemini API failure
    Gemini(GeminiError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for DossierErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DossierErrorKind::Validation(e) => write!(f, "{}", e),
            DossierErrorKind::Generation(e) => write!(f, "{}", e),
            DossierErrorKind::Gemini(e) => write!(f, "{}", e),
            DossierErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// Top-level error type, boxed to keep `Result` payloads small.
#[derive(Debug)]
pub struct DossierError(Box<DossierErrorKind>);

impl DossierError {
    /// Create a new DossierError from an error kind.
    pub fn new(kind: DossierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DossierErrorKind {
        &self.0
    }
}

impl std::fmt::Display for DossierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DossierError {}

// Generic From implementation for any type that converts to DossierErrorKind
impl<T> From<T> for DossierError
where
    T: Into<DossierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type alias using [`DossierError`].
pub type DossierResult<T> = std::result::Result<T, DossierError>;
