//! Error types for dispatched generation calls.

/// Error kinds for generation call failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Backend call failed.
    #[display("Backend call failed: {_0}")]
    Backend(String),
    /// Backend returned no usable text.
    #[display("Backend returned no usable text")]
    EmptyOutput,
    /// Backend call exceeded the configured timeout.
    #[display("Backend call timed out after {waited_ms} ms")]
    Timeout {
        /// Milliseconds waited before giving up
        waited_ms: u64,
    },
    /// Dispatcher worker stopped before the call completed.
    #[display("Dispatcher worker is no longer running")]
    WorkerGone,
}

/// Generation error with location tracking.
///
/// Each failure is local to the request that produced it; the dispatcher
/// keeps draining subsequent requests after any of these.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    line: u32,
    file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}

impl<T> From<T> for GenerationError
where
    T: Into<GenerationErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
