//! Preference-Match Engine — scores a user's trait ratings against the role
//! catalogue and returns a ranked, explainable match list.
//!
//! Scoring is deliberately coarse: per-trait similarity comes from a fixed
//! step function over the rating difference, so the reason strings stay
//! human-readable. Identical input always produces identical output: the
//! engine has no random source and no shared mutable state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching::insights::{build_learning_path, build_market_insights};
use crate::models::role::RoleProfile;

/// Maximum contribution of one perfectly matched top-of-scale trait.
const TRAIT_WEIGHT: f64 = 10.0;

/// Tunable scoring constants. The defaults reproduce the production
/// behavior; none of them has a documented derivation, so treat them as
/// empirical knobs rather than ground truth.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Upper bound of the rating scale (ratings run 1..=max).
    pub rating_scale_max: u8,
    /// Roles scoring at or below this percentage are dropped.
    pub min_match_percentage: u32,
    /// Reason strings kept per role, first-found order.
    pub max_reasons: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rating_scale_max: 6,
            min_match_percentage: 30,
            max_reasons: 3,
        }
    }
}

/// A role enriched with its score, reasons, and synthesized guidance.
/// Produced fresh on every scoring call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMatch {
    #[serde(flatten)]
    pub role: RoleProfile,
    /// 0–100.
    pub match_score: u32,
    pub match_reasons: Vec<String>,
    pub learning_path: Vec<String>,
    pub market_insights: Vec<String>,
}

/// Maps a rating difference to a similarity coefficient.
/// 0 → 1.0, 1 → 0.8, 2 → 0.6, 3 → 0.4, anything further earns no credit.
pub fn similarity_for_difference(difference: u8) -> f64 {
    match difference {
        0 => 1.0,
        1 => 0.8,
        2 => 0.6,
        3 => 0.4,
        _ => 0.0,
    }
}

/// Reason text for differences close enough to mention (similarity ≥ 0.6).
fn reason_for_difference(difference: u8, trait_id: &str) -> Option<String> {
    let label = trait_id.replace('_', " ");
    match difference {
        0 => Some(format!("Perfect match for {label}")),
        1 => Some(format!("Strong match for {label}")),
        2 => Some(format!("Good match for {label}")),
        _ => None,
    }
}

/// Scores every role against the submitted ratings, highest score first.
///
/// Only traits present in both the ratings and a role's criteria contribute;
/// traits a role never asks about are neither credited nor penalized. The
/// denominator is global (all answered traits) so percentages are comparable
/// across roles. Empty ratings short-circuit to an empty list, which is a
/// valid outcome, not an error.
pub fn score_matches(
    ratings: &BTreeMap<String, u8>,
    roles: &[RoleProfile],
    config: &MatchConfig,
) -> Vec<RoleMatch> {
    if ratings.is_empty() {
        return Vec::new();
    }

    let denominator = ratings.len() as f64 * TRAIT_WEIGHT;
    let scale_max = f64::from(config.rating_scale_max);

    let mut scored: Vec<(u32, &RoleProfile, Vec<String>)> = Vec::with_capacity(roles.len());
    for role in roles {
        let mut role_score = 0.0_f64;
        let mut reasons: Vec<String> = Vec::new();

        for (trait_id, expected) in &role.criteria {
            let Some(given) = ratings.get(trait_id) else {
                continue;
            };
            let difference = expected.abs_diff(*given);
            let similarity = similarity_for_difference(difference);

            // Traits the role rates near the top of the scale weigh more,
            // even at equal similarity.
            role_score += similarity * (f64::from(*expected) / scale_max) * TRAIT_WEIGHT;

            if reasons.len() < config.max_reasons {
                if let Some(reason) = reason_for_difference(difference, trait_id) {
                    reasons.push(reason);
                }
            }
        }

        let percentage = ((role_score / denominator) * 100.0).round().clamp(0.0, 100.0) as u32;
        scored.push((percentage, role, reasons));
    }

    // Stable sort: ties keep catalogue declaration order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .filter(|(percentage, _, _)| *percentage > config.min_match_percentage)
        .map(|(percentage, role, reasons)| RoleMatch {
            learning_path: build_learning_path(role),
            market_insights: build_market_insights(role, percentage),
            role: role.clone(),
            match_score: percentage,
            match_reasons: reasons,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::role::SalaryRange;

    fn make_role(id: &str, criteria: &[(&str, u8)]) -> RoleProfile {
        RoleProfile {
            id: id.to_string(),
            title: id.replace('-', " "),
            description: format!("{id} description"),
            salary: SalaryRange {
                min: 60_000,
                max: 140_000,
                avg: 100_000,
                currency: "USD".to_string(),
            },
            demand_score: 75,
            growth_rate: 10.0,
            technical_skills: vec!["Skill A".to_string()],
            interpersonal_skills: vec![],
            tools: vec![],
            experience_band: "0-2 years".to_string(),
            education: vec![],
            example_employers: vec![],
            industries: vec![],
            remote_friendly: true,
            criteria: criteria
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    fn ratings(pairs: &[(&str, u8)]) -> BTreeMap<String, u8> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_similarity_step_function() {
        assert_eq!(similarity_for_difference(0), 1.0);
        assert_eq!(similarity_for_difference(1), 0.8);
        assert_eq!(similarity_for_difference(2), 0.6);
        assert_eq!(similarity_for_difference(3), 0.4);
        assert_eq!(similarity_for_difference(4), 0.0);
        assert_eq!(similarity_for_difference(6), 0.0);
    }

    #[test]
    fn test_empty_ratings_returns_empty_list() {
        let roles = vec![make_role("dev", &[("leadership", 5)])];
        let result = score_matches(&ratings(&[]), &roles, &MatchConfig::default());
        assert!(result.is_empty(), "Zero answered traits must yield no matches");
    }

    /// Two traits expected at 5 on a 1–6 scale, both answered perfectly, with
    /// a third answered trait the role never asks about:
    /// roleScore = 2 × 1.0 × (5/6) × 10 ≈ 16.67, over 3 × 10 → 56%.
    #[test]
    fn test_reference_arithmetic_two_perfect_traits_of_three() {
        let roles = vec![make_role(
            "role-a",
            &[("leadership", 5), ("communication", 5)],
        )];
        let submitted = ratings(&[("leadership", 5), ("communication", 5), ("analytical", 2)]);

        let result = score_matches(&submitted, &roles, &MatchConfig::default());
        assert_eq!(result.len(), 1, "56% clears the 30% bar");
        assert_eq!(result[0].match_score, 56);
        assert_eq!(result[0].match_reasons.len(), 2);
        assert!(result[0].match_reasons[0].starts_with("Perfect match for"));
    }

    #[test]
    fn test_no_overlap_role_is_dropped() {
        let roles = vec![
            make_role("overlapping", &[("communication", 6)]),
            make_role("disjoint", &[("spatial_reasoning", 6)]),
        ];
        let submitted = ratings(&[("communication", 6)]);

        let result = score_matches(&submitted, &roles, &MatchConfig::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].role.id, "overlapping");
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        // One answered trait, expected 3, off by 2: 0.6 × (3/6) × 10 = 3.0
        // over 10 → exactly 30% — dropped.
        let at_bar = vec![make_role("at-bar", &[("communication", 3)])];
        let submitted = ratings(&[("communication", 5)]);
        let result = score_matches(&submitted, &at_bar, &MatchConfig::default());
        assert!(result.is_empty(), "Exactly 30% must be dropped");

        // Expected 4, off by 2: 0.6 × (4/6) × 10 = 4.0 over 10 → 40% — kept.
        let above_bar = vec![make_role("above-bar", &[("communication", 4)])];
        let submitted = ratings(&[("communication", 6)]);
        let result = score_matches(&submitted, &above_bar, &MatchConfig::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].match_score, 40);
    }

    #[test]
    fn test_perfect_profile_scores_100_and_clamps() {
        let roles = vec![make_role("ideal", &[("a", 6), ("b", 6), ("c", 6)])];
        let submitted = ratings(&[("a", 6), ("b", 6), ("c", 6)]);

        let result = score_matches(&submitted, &roles, &MatchConfig::default());
        assert_eq!(result[0].match_score, 100);
    }

    #[test]
    fn test_sorted_descending_with_stable_tie_break() {
        let roles = vec![
            make_role("first-declared", &[("a", 6)]),
            make_role("stronger", &[("a", 6), ("b", 6)]),
            make_role("second-declared", &[("a", 6)]),
        ];
        let submitted = ratings(&[("a", 6), ("b", 6)]);

        let result = score_matches(&submitted, &roles, &MatchConfig::default());
        let ids: Vec<&str> = result.iter().map(|m| m.role.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["stronger", "first-declared", "second-declared"],
            "Ties must keep catalogue order"
        );
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let roles = vec![
            make_role("x", &[("a", 5), ("b", 3), ("c", 6)]),
            make_role("y", &[("a", 2), ("d", 4)]),
        ];
        let submitted = ratings(&[("a", 4), ("b", 3), ("c", 5), ("d", 1)]);
        let config = MatchConfig::default();

        let first = score_matches(&submitted, &roles, &config);
        let second = score_matches(&submitted, &roles, &config);

        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b, "Scoring must be fully deterministic");
    }

    #[test]
    fn test_reasons_capped_at_three() {
        let roles = vec![make_role(
            "many-traits",
            &[("a", 6), ("b", 6), ("c", 6), ("d", 6), ("e", 6)],
        )];
        let submitted = ratings(&[("a", 6), ("b", 6), ("c", 6), ("d", 6), ("e", 6)]);

        let result = score_matches(&submitted, &roles, &MatchConfig::default());
        assert_eq!(result[0].match_reasons.len(), 3);
    }

    #[test]
    fn test_reason_tiers_by_difference() {
        let roles = vec![make_role(
            "tiers",
            &[("perfect", 6), ("strong", 6), ("good", 6), ("credited_quietly", 6)],
        )];
        // Differences: 0, 1, 2, 3 — the last earns 0.4 credit but no reason.
        let submitted = ratings(&[
            ("perfect", 6),
            ("strong", 5),
            ("good", 4),
            ("credited_quietly", 3),
        ]);

        let result = score_matches(&submitted, &roles, &MatchConfig::default());
        let reasons = &result[0].match_reasons;
        assert!(reasons.contains(&"Perfect match for perfect".to_string()));
        assert!(reasons.contains(&"Strong match for strong".to_string()));
        assert!(reasons.contains(&"Good match for good".to_string()));
        assert!(
            !reasons.iter().any(|r| r.contains("credited quietly")),
            "Difference of 3 must not produce a reason"
        );
    }

    #[test]
    fn test_trait_label_humanized_in_reasons() {
        let roles = vec![make_role("r", &[("attention_to_detail", 5)])];
        let submitted = ratings(&[("attention_to_detail", 5)]);

        let result = score_matches(&submitted, &roles, &MatchConfig::default());
        assert_eq!(
            result[0].match_reasons[0],
            "Perfect match for attention to detail"
        );
    }

    #[test]
    fn test_match_carries_enrichment() {
        let roles = vec![make_role("dev", &[("a", 6)])];
        let submitted = ratings(&[("a", 6)]);

        let result = score_matches(&submitted, &roles, &MatchConfig::default());
        assert_eq!(result[0].learning_path.len(), 4);
        assert_eq!(result[0].market_insights.len(), 3);
    }

    #[test]
    fn test_configurable_scale_max_changes_weighting() {
        let roles = vec![make_role("r", &[("a", 5)])];
        let submitted = ratings(&[("a", 5)]);

        let on_six = score_matches(&submitted, &roles, &MatchConfig::default());
        let on_five = score_matches(
            &submitted,
            &roles,
            &MatchConfig {
                rating_scale_max: 5,
                ..MatchConfig::default()
            },
        );

        // 5/6 → 83%, 5/5 → 100%.
        assert_eq!(on_six[0].match_score, 83);
        assert_eq!(on_five[0].match_score, 100);
    }
}
