//! Gemini client configuration
//!
//! The client is constructed from an explicit parameter object instead of a
//! hidden process-wide singleton; `from_env` is the one place environment
//! variables are read.

use anyhow::{anyhow, Result};
use std::time::Duration;

/// Default model used for market analysis
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Gemini analysis client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API credential sent with every request
    pub api_key: String,
    /// Model identifier, e.g. `gemini-3-flash-preview`
    pub model: String,
    /// Per-request timeout for the HTTP transport
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Build a configuration from the process environment.
    ///
    /// `GEMINI_API_KEY` is required; a missing key is reported here rather
    /// than surfacing later as an opaque call failure. `GEMINI_MODEL` and
    /// `GEMINI_TIMEOUT_SECS` fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow!("GEMINI_API_KEY is not set (see .env.example)"))?;
        if api_key.trim().is_empty() {
            return Err(anyhow!("GEMINI_API_KEY is empty"));
        }

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Configuration with an explicit key and default model/timeout.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
