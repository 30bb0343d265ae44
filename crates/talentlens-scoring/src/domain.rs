//! The domain scorer contract.
//!
//! Every test kind with a scorer produces a [`DomainOutcome`]: its
//! [`DomainAnalysis`] variant, a 0–100 overall score, and a
//! [`DomainInsights`] bundle the synthesizer merges without knowing which
//! domain it came from. Adding a domain means adding a `TestKind`, a
//! `DomainAnalysis` variant, a scorer, and an arm in [`scorer_for`].

use talentlens_common::model::{ResponseSet, TestDefinition, TestKind};
use talentlens_common::report::DomainAnalysis;
use talentlens_common::EngineConfig;

use crate::cognitive::CognitiveScorer;
use crate::communication::CommunicationScorer;
use crate::culture::CultureScorer;
use crate::personality::PersonalityScorer;
use crate::technical::TechnicalScorer;

/// Everything a scorer may read.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub definition: &'a TestDefinition,
    pub responses: &'a ResponseSet,
    pub config: &'a EngineConfig,
}

/// Domain-specific contributions to the report, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainInsights {
    pub interpretations: Vec<String>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub development: Vec<String>,
    pub placement: Vec<String>,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainOutcome {
    pub analysis: DomainAnalysis,
    /// 0–100.
    pub overall_score: u32,
    pub insights: DomainInsights,
}

/// A scorer for one test kind.
///
/// Implementations must be pure: the same context always yields the same
/// outcome.
pub trait DomainScorer: Send + Sync {
    fn kind(&self) -> TestKind;

    fn score(&self, ctx: &ScoringContext<'_>) -> DomainOutcome;
}

static PERSONALITY: PersonalityScorer = PersonalityScorer;
static COGNITIVE: CognitiveScorer = CognitiveScorer;
static COMMUNICATION: CommunicationScorer = CommunicationScorer;
static TECHNICAL: TechnicalScorer = TechnicalScorer;
static CULTURE: CultureScorer = CultureScorer;

/// The scorer for a test kind, `None` for unsupported kinds.
pub fn scorer_for(kind: TestKind) -> Option<&'static dyn DomainScorer> {
    match kind {
        TestKind::Personality => Some(&PERSONALITY),
        TestKind::Cognitive => Some(&COGNITIVE),
        TestKind::Communication => Some(&COMMUNICATION),
        TestKind::Technical => Some(&TECHNICAL),
        TestKind::Culture => Some(&CULTURE),
        TestKind::Unsupported => None,
    }
}
