//! Domain types for the market analysis response
//!
//! These mirror the JSON shape the Gemini call is contracted to return via
//! its declared response schema. Everything here is immutable value data:
//! each successful analysis produces a fresh `MarketAnalysisResponse` that
//! replaces the previous one wholesale.

use serde::{Deserialize, Serialize};

/// Categorical estimate of market interest intensity for a product grouping.
///
/// Wire labels are the Portuguese strings the response schema declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandLevel {
    #[serde(rename = "Baixa")]
    Low,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Alta")]
    High,
}

impl DemandLevel {
    /// Localized label, identical to the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            DemandLevel::Low => "Baixa",
            DemandLevel::Medium => "Média",
            DemandLevel::High => "Alta",
        }
    }
}

/// Categorical momentum label for a product grouping's search interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    #[serde(rename = "Subindo")]
    Up,
    #[serde(rename = "Estável")]
    Stable,
    #[serde(rename = "Caindo")]
    Down,
}

impl TrendDirection {
    /// Localized label, identical to the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Up => "Subindo",
            TrendDirection::Stable => "Estável",
            TrendDirection::Down => "Caindo",
        }
    }
}

/// One sample of a product's search-interest history.
///
/// The `date` is an opaque label used for ordering and tooltips only; the
/// chart plots `value` by position, so the sequence order is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub value: f64,
}

/// A product grouping identified by the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTrend {
    /// Identifier assigned by the analysis; assumed unique within one
    /// response, not enforced here.
    pub id: String,

    /// Display name of the product grouping
    pub name: String,

    /// Product category
    pub category: String,

    /// Estimated demand level
    pub demand_level: DemandLevel,

    /// Search-interest momentum
    pub trend: TrendDirection,

    /// Estimated growth, in percent (sign and magnitude unconstrained)
    pub growth_percentage: f64,

    /// Raw keywords grouped under this product. Not in the schema's
    /// required list, so an omitted field decodes as empty.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Heuristic 0-100 score computed by the oracle, not recomputed locally
    pub opportunity_score: f64,

    /// Free-text rationale for why this grouping is an opportunity
    pub reasoning: String,

    /// Chronological interest series, intended length ~30
    pub history: Vec<HistoryPoint>,
}

/// Top-level analysis envelope returned by one `analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysisResponse {
    pub trends: Vec<ProductTrend>,

    /// Free-text market summary
    pub market_overview: String,

    /// Free-text opportunity headlines, in response order
    pub top_opportunities: Vec<String>,
}
