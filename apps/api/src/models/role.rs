use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Annual compensation range for a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub avg: u32,
    pub currency: String,
}

/// A role in the static catalogue. Read-only reference data at scoring time.
///
/// `criteria` maps trait-question ids to the rating this role expects, on the
/// same scale the caller rates on. It only ever covers a subset of the trait
/// space; traits absent here contribute zero and are not penalized.
/// Stored as a BTreeMap so iteration order is stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub id: String,
    pub title: String,
    pub description: String,
    pub salary: SalaryRange,
    /// Market demand, 0–100.
    pub demand_score: u8,
    /// Annualized growth rate, percent.
    pub growth_rate: f64,
    pub technical_skills: Vec<String>,
    pub interpersonal_skills: Vec<String>,
    pub tools: Vec<String>,
    pub experience_band: String,
    pub education: Vec<String>,
    pub example_employers: Vec<String>,
    pub industries: Vec<String>,
    pub remote_friendly: bool,
    pub criteria: BTreeMap<String, u8>,
}
