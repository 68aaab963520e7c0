//! HTTP client for the Gemini generateContent endpoint

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{prompt, schema};
use crate::config::GeminiConfig;
use crate::errors::AnalysisError;
use crate::types::MarketAnalysisResponse;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// ============================================================================
// WIRE ENVELOPE
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate part, if any.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
    }
}

// ============================================================================
// CLIENT
// ============================================================================

/// Client for the Gemini market analysis call.
///
/// Constructed explicitly from a [`GeminiConfig`] and injected where needed;
/// there is no shared global instance.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client against the production Gemini endpoint.
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom endpoint (for testing).
    pub fn with_base_url(config: GeminiConfig, base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            config,
        }
    }

    /// Analyze raw search keywords into structured market insights.
    ///
    /// Issues exactly one generateContent request carrying the fixed system
    /// instruction and the declared response schema, then decodes the reply
    /// in two stages: JSON syntax first ([`AnalysisError::InvalidJson`]),
    /// schema conformance second ([`AnalysisError::Decode`]).
    pub async fn analyze(
        &self,
        keywords: &[String],
    ) -> Result<MarketAnalysisResponse, AnalysisError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.config.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt::build_prompt(keywords),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: prompt::SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema::response_schema(),
            },
        };

        info!(model = %self.config.model, keywords = keywords.len(), "Requesting market analysis");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini API rejected the analysis request");
            return Err(AnalysisError::Api { status, body });
        }

        let envelope: GenerateContentResponse = {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(AnalysisError::InvalidJson)?
        };

        let text = envelope.first_text().ok_or(AnalysisError::EmptyReply)?;
        debug!(reply_len = text.len(), "Decoding analysis reply");

        decode_analysis(&text)
    }
}

/// Decode the model's reply text into a validated analysis response.
///
/// Syntax errors and schema mismatches are kept distinct so a caller (or
/// the log) can tell "not JSON at all" from "JSON missing `marketOverview`".
fn decode_analysis(text: &str) -> Result<MarketAnalysisResponse, AnalysisError> {
    let value: Value =
        serde_json::from_str(text.trim()).map_err(AnalysisError::InvalidJson)?;
    serde_json::from_value(value).map_err(AnalysisError::Decode)
}
