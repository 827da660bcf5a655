//! The serialized call dispatcher.
//!
//! Submitted requests are queued and executed one at a time by a single
//! worker task. Consecutive executions are spaced by a minimum delay
//! measured start to start: a burst of submissions drains at a fixed
//! cadence, and a call that runs longer than the interval imposes no
//! additional wait before the next one.

use crate::GenerationBackend;
use dossier_core::GenerateRequest;
use dossier_error::{DossierResult, GenerationError, GenerationErrorKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Configuration for the call dispatcher.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Minimum spacing between the starts of consecutive backend calls.
    pub throttle_delay: Duration,
    /// Per-call timeout. `None` lets a hung backend call stall the queue
    /// indefinitely.
    pub call_timeout: Option<Duration>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            throttle_delay: Duration::from_millis(1500),
            call_timeout: Some(Duration::from_secs(120)),
        }
    }
}

/// A request waiting in the dispatch queue.
struct QueuedCall {
    request: GenerateRequest,
    reply: oneshot::Sender<Result<String, GenerationError>>,
}

/// Serialized call dispatcher for a generation backend.
///
/// Each dispatcher owns its queue and worker; independent instances do not
/// interfere with each other. Handles are cheap to clone and every handle
/// feeds the same FIFO queue. The worker exits once all handles are dropped
/// and the backlog has drained.
///
/// # Example
///
/// ```rust,ignore
/// use dossier_dispatch::{CallDispatcher, DispatcherConfig};
/// use dossier_core::GenerateRequest;
///
/// let dispatcher = CallDispatcher::new(backend, DispatcherConfig::default());
/// let text = dispatcher.submit(GenerateRequest::text("Summarize...")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CallDispatcher {
    tx: mpsc::UnboundedSender<QueuedCall>,
}

impl CallDispatcher {
    /// Creates a dispatcher draining calls against the given backend.
    ///
    /// Spawns the worker task immediately.
    pub fn new<B>(backend: B, config: DispatcherConfig) -> Self
    where
        B: GenerationBackend,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(drain(Arc::new(backend), config, rx));
        Self { tx }
    }

    /// Submits a request for throttled, serialized execution.
    ///
    /// Returns immediately after enqueueing in the sense that no backend
    /// work happens synchronously; the future resolves once the request
    /// has been executed in FIFO order.
    ///
    /// # Errors
    ///
    /// - `Validation` when the payload is empty; the request never reaches
    ///   the backend.
    /// - `Generation` when the backend call fails, times out, or returns
    ///   no usable text. A failure here never affects other queued requests.
    #[instrument(
        skip(self, request),
        fields(parts = request.inputs.len(), structured = request.output_schema.is_some())
    )]
    pub async fn submit(&self, request: GenerateRequest) -> DossierResult<String> {
        request.validate()?;

        let (reply, result) = oneshot::channel();
        self.tx
            .send(QueuedCall { request, reply })
            .map_err(|_| GenerationError::new(GenerationErrorKind::WorkerGone))?;

        match result.await {
            Ok(outcome) => Ok(outcome?),
            Err(_) => Err(GenerationError::new(GenerationErrorKind::WorkerGone).into()),
        }
    }
}

/// Worker loop: serves queued calls in FIFO order, one at a time.
async fn drain<B>(
    backend: Arc<B>,
    config: DispatcherConfig,
    mut rx: mpsc::UnboundedReceiver<QueuedCall>,
) where
    B: GenerationBackend,
{
    info!(
        throttle_ms = config.throttle_delay.as_millis() as u64,
        "call dispatcher worker started"
    );

    while let Some(call) = rx.recv().await {
        let started = Instant::now();
        let result = execute(backend.as_ref(), &call.request, config.call_timeout).await;

        match &result {
            Ok(text) => debug!(chars = text.len(), "backend call completed"),
            Err(e) => warn!(error = %e, "backend call failed"),
        }

        if call.reply.send(result).is_err() {
            debug!("caller dropped before the result was delivered");
        }

        // Minimum start-to-start spacing: a call slower than the throttle
        // interval has already consumed the wait.
        tokio::time::sleep_until(started + config.throttle_delay).await;
    }

    info!("call dispatcher worker stopped");
}

/// Runs one backend call, applying the per-call timeout when configured.
async fn execute<B>(
    backend: &B,
    request: &GenerateRequest,
    call_timeout: Option<Duration>,
) -> Result<String, GenerationError>
where
    B: GenerationBackend,
{
    let outcome = match call_timeout {
        Some(limit) => match tokio::time::timeout(limit, backend.generate(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(GenerationError::new(GenerationErrorKind::Timeout {
                waited_ms: limit.as_millis() as u64,
            })),
        },
        None => backend.generate(request).await,
    };

    match outcome {
        Ok(text) if text.trim().is_empty() => {
            Err(GenerationError::new(GenerationErrorKind::EmptyOutput))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dossier_core::Input;
    use dossier_error::DossierErrorKind;

    struct EchoBackend;

    #[async_trait]
    impl GenerationBackend for EchoBackend {
        async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerationError> {
            match &request.inputs[0] {
                Input::Text(text) => Ok(text.clone()),
                _ => Ok("binary".to_string()),
            }
        }
    }

    fn fast_config() -> DispatcherConfig {
        DispatcherConfig {
            throttle_delay: Duration::from_millis(1),
            call_timeout: None,
        }
    }

    #[tokio::test]
    async fn test_submit_roundtrip() {
        let dispatcher = CallDispatcher::new(EchoBackend, fast_config());
        let text = dispatcher
            .submit(GenerateRequest::text("hello"))
            .await
            .unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_empty_payload_rejected_before_enqueue() {
        let dispatcher = CallDispatcher::new(EchoBackend, fast_config());
        let err = dispatcher
            .submit(GenerateRequest::text(""))
            .await
            .unwrap_err();
        assert!(matches!(err.kind(), DossierErrorKind::Validation(_)));
    }

    #[tokio::test]
    async fn test_blank_output_is_a_generation_error() {
        struct BlankBackend;

        #[async_trait]
        impl GenerationBackend for BlankBackend {
            async fn generate(&self, _: &GenerateRequest) -> Result<String, GenerationError> {
                Ok("   ".to_string())
            }
        }

        let dispatcher = CallDispatcher::new(BlankBackend, fast_config());
        let err = dispatcher
            .submit(GenerateRequest::text("hello"))
            .await
            .unwrap_err();

        match err.kind() {
            DossierErrorKind::Generation(e) => {
                assert_eq!(e.kind(), &GenerationErrorKind::EmptyOutput)
            }
            other => panic!("expected generation error, got {other}"),
        }
    }
}
