//! Quiz Orchestrator — runs the assembler over every requested skill and
//! records the outcome.
//!
//! Generation is atomic per assessment: every skill is assembled before the
//! first write, so a failure on any skill leaves no assessment row and no
//! attempt history behind.

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::assessment::assembler::assemble;
use crate::assessment::repository::{AssessmentStore, AttemptHistoryStore, QuestionRepository};
use crate::errors::AppError;
use crate::models::assessment::{NewAssessment, SkillRequest};
use crate::models::question::{QuestionRow, QuizQuestion};

/// Parameters for one generation call. An absent `user_id` means an anonymous
/// caller: no exclusion lists, no history writes.
#[derive(Debug, Clone)]
pub struct GenerateAssessmentRequest {
    pub user_id: Option<Uuid>,
    pub skills: Vec<SkillRequest>,
}

/// A freshly generated assessment, answer keys already stripped.
#[derive(Debug, Clone)]
pub struct GeneratedAssessment {
    pub assessment_id: Uuid,
    pub questions: Vec<QuizQuestion>,
}

/// Generates one assessment across the requested skills, in input order.
pub async fn generate_assessment(
    questions: &dyn QuestionRepository,
    history: &dyn AttemptHistoryStore,
    assessments: &dyn AssessmentStore,
    request: &GenerateAssessmentRequest,
    rng: &mut (impl Rng + Send),
) -> Result<GeneratedAssessment, AppError> {
    if request.skills.is_empty() {
        return Err(AppError::EmptySkillSelection);
    }

    let mut selected: Vec<QuestionRow> = Vec::new();
    for skill in &request.skills {
        let excluded = match request.user_id {
            Some(user_id) => {
                history
                    .attempted_question_ids(user_id, &skill.skill_id)
                    .await?
            }
            None => Vec::new(),
        };

        let batch = assemble(
            questions,
            history,
            &skill.skill_id,
            request.user_id,
            &excluded,
            rng,
        )
        .await?;

        info!(
            "Assembled {} questions for skill {}",
            batch.len(),
            skill.skill_id
        );
        selected.extend(batch);
    }

    let question_ids: Vec<Uuid> = selected.iter().map(|q| q.id).collect();

    let assessment_id = assessments
        .persist(&NewAssessment {
            user_id: request.user_id,
            skills: request.skills.clone(),
            question_ids: question_ids.clone(),
        })
        .await?;

    if let Some(user_id) = request.user_id {
        history.record(user_id, &question_ids).await?;
    }

    info!(
        "Generated assessment {assessment_id} ({} skills, {} questions)",
        request.skills.len(),
        question_ids.len()
    );

    Ok(GeneratedAssessment {
        assessment_id,
        questions: selected.iter().map(QuizQuestion::from_row).collect(),
    })
}
