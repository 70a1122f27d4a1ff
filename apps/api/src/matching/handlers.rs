//! Axum route handlers for the Preference-Match API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::engine::{score_matches, RoleMatch};
use crate::models::role::RoleProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    /// trait-question id → rating. A resubmission replaces the whole mapping.
    pub ratings: BTreeMap<String, u8>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<RoleMatch>,
    pub total_traits_answered: usize,
}

/// POST /api/v1/matches
///
/// Scores the submitted ratings against the whole catalogue. An empty
/// ratings map is a valid request and yields an empty match list; ratings
/// outside the scale are a caller error.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let scale_max = state.match_config.rating_scale_max;
    for (trait_id, rating) in &request.ratings {
        if *rating < 1 || *rating > scale_max {
            return Err(AppError::Validation(format!(
                "Rating for '{trait_id}' must be between 1 and {scale_max}, got {rating}"
            )));
        }
    }

    let matches = score_matches(
        &request.ratings,
        state.catalogue.all(),
        &state.match_config,
    );

    Ok(Json(MatchResponse {
        total_traits_answered: request.ratings.len(),
        matches,
    }))
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleProfile>> {
    Json(state.catalogue.all().to_vec())
}

/// GET /api/v1/roles/:id
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RoleProfile>, AppError> {
    state
        .catalogue
        .by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Role {id} not found")))
}
