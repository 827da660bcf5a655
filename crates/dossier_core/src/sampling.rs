//! Sampling parameters forwarded to generation backends.

use serde::{Deserialize, Serialize};

/// Sampling options forwarded verbatim to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.95,
        }
    }
}
