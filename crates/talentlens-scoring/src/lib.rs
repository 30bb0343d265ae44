//! talentlens-scoring — Assessment scoring and interpretation engine.
//!
//! Pipeline: aggregate answers by category, run the domain scorer selected by
//! the test kind, audit reliability, then synthesize the final report.

pub mod normalise;
pub mod aggregator;
pub mod roster;
pub mod personality;
pub mod global_factors;
pub mod typology;
pub mod cognitive;
pub mod templates;
pub mod communication;
pub mod technical;
pub mod culture;
pub mod domain;
pub mod reliability;
pub mod synthesis;
pub mod engine;

pub use domain::{DomainInsights, DomainOutcome, DomainScorer, ScoringContext};
pub use engine::{score_assessment, AssessmentEngine};
