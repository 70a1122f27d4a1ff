//! Axum route handlers for the Assessment API.

use axum::{
    extract::{Path, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::orchestrator::{generate_assessment, GenerateAssessmentRequest};
use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, SkillRequest};
use crate::models::question::QuizQuestion;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateAssessmentBody {
    /// Absent for anonymous callers, who get no repeat-avoidance.
    pub user_id: Option<Uuid>,
    pub skills: Vec<SkillRequest>,
}

#[derive(Debug, Serialize)]
pub struct GenerateAssessmentResponse {
    pub assessment_id: Uuid,
    pub questions: Vec<QuizQuestion>,
}

/// POST /api/v1/assessments
///
/// Generates one assessment across the requested skills. Fails whole:
/// either every skill assembles or nothing is persisted.
pub async fn handle_generate_assessment(
    State(state): State<AppState>,
    Json(body): Json<GenerateAssessmentBody>,
) -> Result<Json<GenerateAssessmentResponse>, AppError> {
    let request = GenerateAssessmentRequest {
        user_id: body.user_id,
        skills: body.skills,
    };

    let mut rng = StdRng::from_entropy();
    let result = generate_assessment(
        state.questions.as_ref(),
        state.history.as_ref(),
        state.assessments.as_ref(),
        &request,
        &mut rng,
    )
    .await?;

    Ok(Json(GenerateAssessmentResponse {
        assessment_id: result.assessment_id,
        questions: result.questions,
    }))
}

/// GET /api/v1/assessments/:id
///
/// Returns the stored assessment record (skills requested and question ids).
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentRow>, AppError> {
    state
        .assessments
        .find(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generate_body_deserializes_with_levels() {
        let body: GenerateAssessmentBody = serde_json::from_value(json!({
            "user_id": Uuid::new_v4(),
            "skills": [
                {"skill_id": "react", "level": "beginner"},
                {"skill_id": "sql"}
            ]
        }))
        .unwrap();
        assert_eq!(body.skills.len(), 2);
        assert_eq!(body.skills[0].level.as_deref(), Some("beginner"));
        assert!(body.skills[1].level.is_none());
    }

    #[test]
    fn test_generate_body_allows_anonymous() {
        let body: GenerateAssessmentBody = serde_json::from_value(json!({
            "skills": [{"skill_id": "python"}]
        }))
        .unwrap();
        assert!(body.user_id.is_none());
    }
}
