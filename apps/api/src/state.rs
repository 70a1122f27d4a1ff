use std::sync::Arc;

use crate::assessment::repository::{AssessmentStore, AttemptHistoryStore, QuestionRepository};
use crate::matching::catalogue::RoleCatalogue;
use crate::matching::engine::MatchConfig;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The three stores and the catalogue are trait objects, swapped at startup:
/// Postgres adapters in production, in-memory fixtures in tests.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub history: Arc<dyn AttemptHistoryStore>,
    pub assessments: Arc<dyn AssessmentStore>,
    pub catalogue: Arc<dyn RoleCatalogue>,
    /// Scoring constants. `rating_scale_max` may be overridden via env.
    pub match_config: MatchConfig,
}
