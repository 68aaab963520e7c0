//! Error taxonomy for the analysis call
//!
//! Transport failures, HTTP-level rejections, syntactically invalid reply
//! text and schema mismatches are distinct variants. The view layer still
//! collapses all of them into one fixed banner message; the distinction
//! exists for logs and for callers that want to react differently.

use reqwest::StatusCode;

/// Failure modes of one `GeminiClient::analyze` invocation.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Network or transport failure reaching the Gemini endpoint
    #[error("request to Gemini failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the service
    #[error("Gemini returned status {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The response envelope carried no text candidate to decode
    #[error("Gemini reply contained no text candidate")]
    EmptyReply,

    /// The reply text is not syntactically valid JSON
    #[error("Gemini reply is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Valid JSON that does not match the declared analysis schema; the
    /// serde detail names the missing or mismatched field
    #[error("Gemini reply does not match the analysis schema: {0}")]
    Decode(#[source] serde_json::Error),
}
