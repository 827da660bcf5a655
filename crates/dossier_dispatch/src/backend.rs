//! Backend trait consumed by the call dispatcher.

use async_trait::async_trait;
use dossier_core::GenerateRequest;
use dossier_error::GenerationError;

/// A remote text/structured-generation service.
///
/// The dispatcher treats implementations as opaque asynchronous calls:
/// given a request, produce generated text or fail. Ordering, throttling,
/// and failure isolation are the dispatcher's concern, not the backend's.
#[async_trait]
pub trait GenerationBackend: Send + Sync + 'static {
    /// Generates text for the given request.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] when the remote call fails or the
    /// service produces no usable output.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerationError>;
}
