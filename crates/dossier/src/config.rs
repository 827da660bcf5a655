//! Dispatch configuration loaded from TOML.

use derive_getters::Getters;
use dossier_core::SamplingOptions;
use dossier_dispatch::DispatcherConfig;
use dossier_error::{ConfigError, DossierResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for a Gemini-backed call dispatcher.
///
/// Defaults mirror the deployed application: `gemini-2.5-flash`, a 1.5 s
/// spacing between call starts, a 120 s per-call timeout, and conservative
/// sampling for document analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct DispatchSettings {
    /// Model identifier
    #[serde(default = "default_model")]
    model: String,
    /// Minimum spacing between call starts, in milliseconds
    #[serde(default = "default_throttle_delay_ms")]
    throttle_delay_ms: u64,
    /// Per-call timeout in seconds; omit for unbounded calls
    #[serde(default = "default_call_timeout_secs")]
    call_timeout_secs: Option<u64>,
    /// Default sampling options for new requests
    #[serde(default)]
    sampling: SamplingOptions,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_throttle_delay_ms() -> u64 {
    1500
}

fn default_call_timeout_secs() -> Option<u64> {
    Some(120)
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            throttle_delay_ms: default_throttle_delay_ms(),
            call_timeout_secs: default_call_timeout_secs(),
            sampling: SamplingOptions::default(),
        }
    }
}

impl DispatchSettings {
    /// Load dispatch settings from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> DossierResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// Converts these settings into a dispatcher configuration.
    pub fn dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig {
            throttle_delay: Duration::from_millis(self.throttle_delay_ms),
            call_timeout: self.call_timeout_secs.map(Duration::from_secs),
        }
    }
}
