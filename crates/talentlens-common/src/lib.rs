//! talentlens-common — Shared data model, errors, and engine configuration
//! used across all TalentLens crates.

pub mod error;
pub mod model;
pub mod report;
pub mod engine_config;

// Re-export commonly used types
pub use error::{Result, TalentLensError};
pub use engine_config::EngineConfig;
pub use model::{AnswerValue, Answer, Candidate, Question, ResponseSet, ResponseType, ScoringRequest, TestDefinition, TestKind};
pub use report::{AssessmentReport, DomainAnalysis, ReliabilityVerdict};
