//! Gemini analysis client
//!
//! One logical operation: send the keyword list to the Gemini
//! generateContent endpoint with a declared JSON response schema and decode
//! the structured market analysis it returns. No retry, no cache, no
//! streaming; exactly one outbound call per invocation.

pub mod client;
pub mod prompt;
pub mod schema;

pub use client::GeminiClient;
