use std::sync::Arc;

use crate::config::Config;
use crate::scoring::scorer::CompetencyScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: KeywordCompetencyScorer. Swap via ENABLE_LLM_VALIDATION.
    pub scorer: Arc<dyn CompetencyScorer>,
}
