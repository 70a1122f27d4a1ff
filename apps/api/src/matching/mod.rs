// Preference matching: scores trait ratings against the role catalogue and
// returns ranked, explainable matches enriched with learning-path and
// market-insight text. Scoring is deterministic; no random source here.

pub mod catalogue;
pub mod engine;
pub mod handlers;
pub mod insights;
pub mod roles;
