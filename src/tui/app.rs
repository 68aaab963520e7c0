//! Dashboard application state
//!
//! The observable state is the `{loading, data, error}` triple; everything
//! else is cursor bookkeeping. Refreshes are issued a monotonically
//! increasing sequence token and only the settlement carrying the latest
//! token is applied, so an overlapping refresh cannot be overwritten by a
//! stale reply.

use tracing::{debug, error, info};

use crate::errors::AnalysisError;
use crate::types::MarketAnalysisResponse;

/// Fixed user-facing message shown for any analysis failure. The error
/// detail goes to the log, not the banner.
pub const ANALYSIS_ERROR_MESSAGE: &str =
    "Não foi possível carregar os dados. Verifique sua conexão ou chave de API.";

/// Number of placeholder cards rendered while an analysis is in flight.
pub const SKELETON_CARDS: usize = 4;

/// Settlement of one analysis request, tagged with its sequence token.
pub type AnalysisOutcome = (u64, Result<MarketAnalysisResponse, AnalysisError>);

pub struct App {
    /// True while an analysis request is in flight
    pub loading: bool,
    /// Latest successful analysis; replaced wholesale, never merged
    pub data: Option<MarketAnalysisResponse>,
    /// Banner message for the latest failure, cleared on refresh
    pub error: Option<String>,
    pub selected_card: usize,
    pub should_quit: bool,

    /// Token of the most recently issued refresh
    latest_seq: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
            selected_card: 0,
            should_quit: false,
            latest_seq: 0,
        }
    }

    /// Enter the loading state and issue a fresh sequence token.
    ///
    /// Synchronously sets `loading`, clears any previous error and leaves
    /// `data` visible underneath the skeletons-to-come.
    pub fn begin_refresh(&mut self) -> u64 {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        info!(seq = self.latest_seq, "Market analysis refresh started");
        self.latest_seq
    }

    /// Apply the settlement of an analysis request.
    ///
    /// A settlement whose token is not the latest issued belongs to a
    /// superseded refresh and is discarded without touching any state.
    pub fn apply_outcome(&mut self, outcome: AnalysisOutcome) {
        let (seq, result) = outcome;
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "Discarding stale analysis settlement");
            return;
        }

        self.loading = false;
        match result {
            Ok(analysis) => {
                info!(trends = analysis.trends.len(), "Market analysis loaded");
                self.data = Some(analysis);
                self.error = None;
                self.clamp_selection();
            }
            Err(e) => {
                // Previous data stays visible alongside the banner
                error!("Market analysis failed: {e}");
                self.error = Some(ANALYSIS_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Number of product cards currently renderable.
    pub fn card_count(&self) -> usize {
        self.data.as_ref().map(|d| d.trends.len()).unwrap_or(0)
    }

    pub fn select_next(&mut self) {
        let count = self.card_count();
        if count > 0 {
            self.selected_card = (self.selected_card + 1).min(count - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.card_count();
        if count == 0 {
            self.selected_card = 0;
        } else if self.selected_card >= count {
            self.selected_card = count - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DemandLevel, TrendDirection};

    fn sample_response() -> MarketAnalysisResponse {
        serde_json::from_str(
            r#"{
                "trends": [{
                    "id": "1",
                    "name": "Smartphones Importados",
                    "category": "Eletrônicos",
                    "demandLevel": "Alta",
                    "trend": "Subindo",
                    "growthPercentage": 32,
                    "keywords": ["iphone"],
                    "opportunityScore": 88,
                    "reasoning": "Alta procura por importação direta",
                    "history": [
                        {"date": "2024-01-01", "value": 10},
                        {"date": "2024-01-02", "value": 14}
                    ]
                }],
                "marketOverview": "Mercado em expansão",
                "topOpportunities": ["Eletrônicos"]
            }"#,
        )
        .unwrap()
    }

    fn transport_error() -> AnalysisError {
        AnalysisError::EmptyReply
    }

    #[test]
    fn test_begin_refresh_sets_loading_and_clears_error() {
        let mut app = App::new();
        app.error = Some("old".to_string());

        let seq = app.begin_refresh();

        assert!(app.loading);
        assert!(app.error.is_none());
        assert_eq!(seq, 1);
    }

    #[test]
    fn test_success_replaces_data_exactly() {
        let mut app = App::new();
        let seq = app.begin_refresh();
        let response = sample_response();

        app.apply_outcome((seq, Ok(response.clone())));

        assert!(!app.loading);
        assert_eq!(app.data, Some(response));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_first_call_failure_leaves_data_absent() {
        let mut app = App::new();
        let seq = app.begin_refresh();

        app.apply_outcome((seq, Err(transport_error())));

        assert!(!app.loading);
        assert!(app.data.is_none());
        assert_eq!(app.error.as_deref(), Some(ANALYSIS_ERROR_MESSAGE));
    }

    #[test]
    fn test_failure_preserves_stale_data() {
        let mut app = App::new();
        let seq = app.begin_refresh();
        app.apply_outcome((seq, Ok(sample_response())));

        let seq = app.begin_refresh();
        app.apply_outcome((seq, Err(transport_error())));

        // Stale data remains visible alongside the error banner
        assert_eq!(app.data, Some(sample_response()));
        assert!(app.error.is_some());
        assert!(!app.loading);
    }

    #[test]
    fn test_stale_settlement_is_discarded() {
        let mut app = App::new();
        let first = app.begin_refresh();
        let second = app.begin_refresh();

        // The superseded first request settles late; nothing may change
        app.apply_outcome((first, Ok(sample_response())));
        assert!(app.loading);
        assert!(app.data.is_none());

        app.apply_outcome((second, Ok(sample_response())));
        assert!(!app.loading);
        assert!(app.data.is_some());
    }

    #[test]
    fn test_loaded_scenario_end_to_end() {
        let mut app = App::new();
        let seq = app.begin_refresh();
        app.apply_outcome((seq, Ok(sample_response())));

        let data = app.data.as_ref().unwrap();
        assert_eq!(data.trends.len(), 1);
        assert_eq!(data.trends[0].demand_level, DemandLevel::High);
        assert_eq!(data.trends[0].demand_level.label(), "Alta");
        assert_eq!(data.trends[0].trend, TrendDirection::Up);
        assert_eq!(data.trends[0].trend.label(), "Subindo");
        assert_eq!(data.trends[0].history.len(), 2);
    }

    #[test]
    fn test_selection_is_clamped_to_card_count() {
        let mut app = App::new();
        app.selected_card = 5;
        let seq = app.begin_refresh();
        app.apply_outcome((seq, Ok(sample_response())));

        assert_eq!(app.selected_card, 0);
        app.select_next();
        assert_eq!(app.selected_card, 0); // only one card
        app.select_previous();
        assert_eq!(app.selected_card, 0);
    }
}
