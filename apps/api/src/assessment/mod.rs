// Adaptive assessment generation: per-skill type-balanced quiz assembly with
// repeat avoidance, rotation reset on pool exhaustion, and atomic multi-skill
// orchestration. Store access goes through the repository traits only.

pub mod assembler;
pub mod handlers;
pub mod orchestrator;
pub mod repository;
