use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One requested skill in a generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequest {
    pub skill_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// A generated assessment as stored. Read-only after creation; answer
/// submission references it by id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    /// The requested skills and levels, as submitted (JSONB).
    pub skills: Value,
    pub question_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Insert parameters for a new assessment record.
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub user_id: Option<Uuid>,
    pub skills: Vec<SkillRequest>,
    pub question_ids: Vec<Uuid>,
}
