//! Declared response schema for the analysis call
//!
//! Gemini is contracted to emit JSON matching this shape when the request
//! carries `responseMimeType: application/json` plus this schema. The enum
//! labels here must stay in lockstep with the serde renames in
//! [`crate::types`].

use serde_json::{json, Value};

/// Structured-output schema for [`crate::types::MarketAnalysisResponse`].
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "trends": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "category": { "type": "STRING" },
                        "demandLevel": { "type": "STRING", "enum": ["Baixa", "Média", "Alta"] },
                        "trend": { "type": "STRING", "enum": ["Subindo", "Estável", "Caindo"] },
                        "growthPercentage": { "type": "NUMBER" },
                        "keywords": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "opportunityScore": { "type": "NUMBER" },
                        "reasoning": { "type": "STRING" },
                        "history": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "date": { "type": "STRING" },
                                    "value": { "type": "NUMBER" }
                                }
                            }
                        }
                    },
                    "required": [
                        "id", "name", "category", "demandLevel", "trend",
                        "growthPercentage", "opportunityScore", "reasoning", "history"
                    ]
                }
            },
            "marketOverview": { "type": "STRING" },
            "topOpportunities": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["trends", "marketOverview", "topOpportunities"]
    })
}
