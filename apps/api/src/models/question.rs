#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Question category. Drives the type balance applied during quiz assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    SelfRating,
    ShortAnswer,
    FillInBlank,
    Scenario,
    Code,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::SelfRating => "self_rating",
            QuestionType::ShortAnswer => "short_answer",
            QuestionType::FillInBlank => "fill_in_blank",
            QuestionType::Scenario => "scenario",
            QuestionType::Code => "code",
        }
    }

    /// Parses the DB column value. Unknown values return None; such rows are
    /// still selectable during remainder fill but never count toward a
    /// type-balance slot.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "multiple_choice" => Some(QuestionType::MultipleChoice),
            "self_rating" => Some(QuestionType::SelfRating),
            "short_answer" => Some(QuestionType::ShortAnswer),
            "fill_in_blank" => Some(QuestionType::FillInBlank),
            "scenario" => Some(QuestionType::Scenario),
            "code" => Some(QuestionType::Code),
            _ => None,
        }
    }

    /// Free-form practical types share a single assembly slot.
    pub fn is_practical(&self) -> bool {
        matches!(
            self,
            QuestionType::ShortAnswer
                | QuestionType::FillInBlank
                | QuestionType::Scenario
                | QuestionType::Code
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A question as stored, answer key included. Never serialized to
/// quiz-takers; handlers expose `QuizQuestion` instead.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub id: Uuid,
    pub skill_id: String,
    pub question_type: String,
    pub level: Option<String>,
    pub prompt: String,
    /// Type-specific payload: `{"options": [...], "answer": ...}` for
    /// multiple choice, `{"expected_answer": ...}` for practical types,
    /// `{"response_shape": ...}` for self-rating.
    pub payload: Value,
    pub created_at: DateTime<Utc>,
}

impl QuestionRow {
    pub fn parsed_type(&self) -> Option<QuestionType> {
        QuestionType::parse(&self.question_type)
    }
}

/// The answer-stripped view handed to quiz-takers.
///
/// Built field-by-field from the payload: `answer` and `expected_answer`
/// keys must never pass through, whatever the payload contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub skill_id: String,
    pub question_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_shape_hint: Option<String>,
}

impl QuizQuestion {
    pub fn from_row(row: &QuestionRow) -> Self {
        let options = row
            .payload
            .get("options")
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|o| o.as_str().map(str::to_string))
                    .collect()
            });

        let response_shape_hint = row
            .payload
            .get("response_shape")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        QuizQuestion {
            id: row.id,
            skill_id: row.skill_id.clone(),
            question_type: row.question_type.clone(),
            level: row.level.clone(),
            prompt: row.prompt.clone(),
            options,
            response_shape_hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_row(question_type: &str, payload: Value) -> QuestionRow {
        QuestionRow {
            id: Uuid::new_v4(),
            skill_id: "javascript".to_string(),
            question_type: question_type.to_string(),
            level: Some("beginner".to_string()),
            prompt: "What does `typeof null` evaluate to?".to_string(),
            payload,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_question_type_parse_roundtrip() {
        for t in [
            QuestionType::MultipleChoice,
            QuestionType::SelfRating,
            QuestionType::ShortAnswer,
            QuestionType::FillInBlank,
            QuestionType::Scenario,
            QuestionType::Code,
        ] {
            assert_eq!(QuestionType::parse(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_question_type_parse_unknown_is_none() {
        assert_eq!(QuestionType::parse("essay"), None);
    }

    #[test]
    fn test_practical_types() {
        assert!(QuestionType::ShortAnswer.is_practical());
        assert!(QuestionType::FillInBlank.is_practical());
        assert!(QuestionType::Scenario.is_practical());
        assert!(QuestionType::Code.is_practical());
        assert!(!QuestionType::MultipleChoice.is_practical());
        assert!(!QuestionType::SelfRating.is_practical());
    }

    #[test]
    fn test_quiz_question_strips_multiple_choice_answer() {
        let row = make_row(
            "multiple_choice",
            json!({
                "options": ["object", "null", "undefined", "string"],
                "answer": "object"
            }),
        );
        let q = QuizQuestion::from_row(&row);
        assert_eq!(
            q.options,
            Some(vec![
                "object".to_string(),
                "null".to_string(),
                "undefined".to_string(),
                "string".to_string()
            ])
        );

        let json = serde_json::to_string(&q).unwrap();
        assert!(
            !json.contains("\"answer\""),
            "Answer key must never serialize: {json}"
        );
    }

    #[test]
    fn test_quiz_question_strips_expected_answer() {
        let row = make_row(
            "short_answer",
            json!({"expected_answer": "A closure captures its environment"}),
        );
        let q = QuizQuestion::from_row(&row);
        assert!(q.options.is_none());

        let json = serde_json::to_string(&q).unwrap();
        assert!(
            !json.contains("expected_answer"),
            "Expected answer must never serialize: {json}"
        );
        assert!(!json.contains("closure captures"));
    }

    #[test]
    fn test_quiz_question_keeps_response_shape_hint() {
        let row = make_row("self_rating", json!({"response_shape": "scale_1_to_5"}));
        let q = QuizQuestion::from_row(&row);
        assert_eq!(q.response_shape_hint, Some("scale_1_to_5".to_string()));
    }

    #[test]
    fn test_quiz_question_preserves_prompt_and_level() {
        let row = make_row("multiple_choice", json!({"options": [], "answer": "x"}));
        let q = QuizQuestion::from_row(&row);
        assert_eq!(q.prompt, row.prompt);
        assert_eq!(q.level, Some("beginner".to_string()));
        assert_eq!(q.skill_id, "javascript");
    }
}
