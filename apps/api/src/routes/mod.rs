pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessments",
            post(assessment::handle_generate_assessment),
        )
        .route(
            "/api/v1/assessments/:id",
            get(assessment::handle_get_assessment),
        )
        // Preference-match API
        .route("/api/v1/matches", post(matching::handle_match))
        .route("/api/v1/roles", get(matching::handle_list_roles))
        .route("/api/v1/roles/:id", get(matching::handle_get_role))
        .with_state(state)
}
