//! Collaborator traits for quiz assembly, plus their Postgres adapters.
//!
//! The assembler and orchestrator only ever see these traits, so the core
//! stays testable against in-memory fixtures without a live store.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, NewAssessment};
use crate::models::question::QuestionRow;

// ────────────────────────────────────────────────────────────────────────────
// Traits
// ────────────────────────────────────────────────────────────────────────────

/// Read access to the question pool, filtered by skill and exclusion list.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_by_skill(
        &self,
        skill_id: &str,
        exclude: &[Uuid],
    ) -> Result<Vec<QuestionRow>, AppError>;

    async fn count_by_skill(&self, skill_id: &str) -> Result<i64, AppError>;
}

/// Append-only record of (user, question) attempts.
#[async_trait]
pub trait AttemptHistoryStore: Send + Sync {
    async fn attempted_question_ids(
        &self,
        user_id: Uuid,
        skill_id: &str,
    ) -> Result<Vec<Uuid>, AppError>;

    /// Wipes a user's history for one skill. Used to reset question rotation
    /// when the unseen pool runs dry.
    async fn clear(&self, user_id: Uuid, skill_id: &str) -> Result<(), AppError>;

    /// Duplicate-safe: re-recording an existing (user, question) pair must
    /// neither error nor double-count.
    async fn record(&self, user_id: Uuid, question_ids: &[Uuid]) -> Result<(), AppError>;
}

/// Persistence for generated assessment records.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    async fn persist(&self, assessment: &NewAssessment) -> Result<Uuid, AppError>;

    async fn find(&self, id: Uuid) -> Result<Option<AssessmentRow>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres adapters
// ────────────────────────────────────────────────────────────────────────────

pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn find_by_skill(
        &self,
        skill_id: &str,
        exclude: &[Uuid],
    ) -> Result<Vec<QuestionRow>, AppError> {
        Ok(sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT * FROM questions
            WHERE skill_id = $1 AND NOT (id = ANY($2))
            ORDER BY created_at ASC
            "#,
        )
        .bind(skill_id)
        .bind(exclude)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn count_by_skill(&self, skill_id: &str) -> Result<i64, AppError> {
        Ok(
            sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE skill_id = $1")
                .bind(skill_id)
                .fetch_one(&self.pool)
                .await?,
        )
    }
}

pub struct PgAttemptHistoryStore {
    pool: PgPool,
}

impl PgAttemptHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttemptHistoryStore for PgAttemptHistoryStore {
    async fn attempted_question_ids(
        &self,
        user_id: Uuid,
        skill_id: &str,
    ) -> Result<Vec<Uuid>, AppError> {
        // Attempts store only (user, question); skill scoping joins through
        // the owning question.
        Ok(sqlx::query_scalar(
            r#"
            SELECT a.question_id
            FROM attempts a
            JOIN questions q ON q.id = a.question_id
            WHERE a.user_id = $1 AND q.skill_id = $2
            "#,
        )
        .bind(user_id)
        .bind(skill_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn clear(&self, user_id: Uuid, skill_id: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM attempts a
            USING questions q
            WHERE a.question_id = q.id AND a.user_id = $1 AND q.skill_id = $2
            "#,
        )
        .bind(user_id)
        .bind(skill_id)
        .execute(&self.pool)
        .await?;

        info!(
            "Cleared {} attempt entries for user {user_id} skill {skill_id}",
            result.rows_affected()
        );
        Ok(())
    }

    async fn record(&self, user_id: Uuid, question_ids: &[Uuid]) -> Result<(), AppError> {
        for question_id in question_ids {
            sqlx::query(
                r#"
                INSERT INTO attempts (user_id, question_id)
                VALUES ($1, $2)
                ON CONFLICT (user_id, question_id) DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(question_id)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }
}

pub struct PgAssessmentStore {
    pool: PgPool,
}

impl PgAssessmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentStore for PgAssessmentStore {
    async fn persist(&self, assessment: &NewAssessment) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let skills = serde_json::to_value(&assessment.skills)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize skills: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO assessments (id, user_id, skills, question_ids)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(assessment.user_id)
        .bind(&skills)
        .bind(&assessment.question_ids)
        .execute(&self.pool)
        .await?;

        info!(
            "Persisted assessment {id} with {} questions",
            assessment.question_ids.len()
        );
        Ok(id)
    }

    async fn find(&self, id: Uuid) -> Result<Option<AssessmentRow>, AppError> {
        Ok(
            sqlx::query_as::<_, AssessmentRow>("SELECT * FROM assessments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory fixtures for assembler/orchestrator tests
// ────────────────────────────────────────────────────────────────────────────
