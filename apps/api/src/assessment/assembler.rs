//! Quiz Assembler — builds a bounded, type-balanced question set for one skill.
//!
//! Selection runs over a snapshot of the question pool: an unbiased shuffle,
//! a 3/1/1 type-priority pick, then a remainder fill in shuffle order. The
//! random source is passed in by the caller so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::assessment::repository::{AttemptHistoryStore, QuestionRepository};
use crate::errors::AppError;
use crate::models::question::{QuestionRow, QuestionType};

/// Target quiz length per skill.
pub const QUIZ_SIZE: usize = 5;
/// At most 3 multiple-choice questions per quiz; levels may mix freely.
pub const MULTIPLE_CHOICE_LIMIT: usize = 3;
/// At most 1 self-rating question per quiz.
pub const SELF_RATING_LIMIT: usize = 1;
/// At most 1 free-form practical question (short answer, fill-in-blank,
/// scenario, or code) per quiz.
pub const PRACTICAL_LIMIT: usize = 1;
/// A skill must have at least this many authored questions before any quiz
/// can be assembled for it.
pub const MIN_POOL_SIZE: usize = 15;

/// Assembles up to [`QUIZ_SIZE`] questions for one skill.
///
/// Flow:
/// 1. Reject skills whose total authored pool is below [`MIN_POOL_SIZE`].
/// 2. Fetch the pool minus `excluded`. If fewer than [`QUIZ_SIZE`] remain,
///    the rotation is exhausted: wipe the user's history for this skill and
///    fall back to the full pool.
/// 3. Run the balanced selection over the chosen pool.
///
/// Anonymous callers (no `user_id`) never carry exclusions, so they never
/// trigger the history reset.
pub async fn assemble(
    questions: &dyn QuestionRepository,
    history: &dyn AttemptHistoryStore,
    skill_id: &str,
    user_id: Option<Uuid>,
    excluded: &[Uuid],
    rng: &mut (impl Rng + Send),
) -> Result<Vec<QuestionRow>, AppError> {
    let total = questions.count_by_skill(skill_id).await?;
    if (total as usize) < MIN_POOL_SIZE {
        return Err(AppError::InsufficientQuestions {
            skill_id: skill_id.to_string(),
            found: total as usize,
            required: MIN_POOL_SIZE,
        });
    }

    let mut pool = questions.find_by_skill(skill_id, excluded).await?;

    if pool.len() < QUIZ_SIZE {
        // Unseen pool exhausted: reset rotation and reuse the full pool.
        if let Some(user_id) = user_id {
            history.clear(user_id, skill_id).await?;
            info!("Question rotation reset for user {user_id} on skill {skill_id}");
        }
        pool = questions.find_by_skill(skill_id, &[]).await?;
    }

    Ok(select_balanced(pool, rng))
}

/// Pure selection step: shuffle, pick by type priority, fill the remainder.
///
/// Pools smaller than [`QUIZ_SIZE`] yield the whole pool; a short quiz is a
/// valid result, not an error. Questions with an unrecognized type never
/// occupy a priority slot but remain eligible for the remainder fill.
pub fn select_balanced(mut pool: Vec<QuestionRow>, rng: &mut impl Rng) -> Vec<QuestionRow> {
    // Fisher-Yates via SliceRandom: every permutation equally likely.
    pool.shuffle(rng);

    let mut picked = vec![false; pool.len()];
    let mut selected: Vec<usize> = Vec::with_capacity(QUIZ_SIZE);

    take_matching(&pool, &mut picked, &mut selected, MULTIPLE_CHOICE_LIMIT, |q| {
        q.parsed_type() == Some(QuestionType::MultipleChoice)
    });
    take_matching(&pool, &mut picked, &mut selected, SELF_RATING_LIMIT, |q| {
        q.parsed_type() == Some(QuestionType::SelfRating)
    });
    take_matching(&pool, &mut picked, &mut selected, PRACTICAL_LIMIT, |q| {
        q.parsed_type().is_some_and(|t| t.is_practical())
    });

    // Under-represented categories leave gaps. Fill with anything not yet
    // selected, preserving shuffle order.
    let remainder = QUIZ_SIZE.saturating_sub(selected.len());
    take_matching(&pool, &mut picked, &mut selected, remainder, |_| true);

    selected.into_iter().map(|i| pool[i].clone()).collect()
}

/// Marks up to `limit` unpicked questions matching `pred`, in pool order.
fn take_matching(
    pool: &[QuestionRow],
    picked: &mut [bool],
    selected: &mut Vec<usize>,
    limit: usize,
    pred: impl Fn(&QuestionRow) -> bool,
) {
    let mut taken = 0;
    for (i, question) in pool.iter().enumerate() {
        if taken == limit {
            break;
        }
        if !picked[i] && pred(question) {
            picked[i] = true;
            selected.push(i);
            taken += 1;
        }
    }
}
