//! Output data model: the assessment report and its domain sub-reports.
//!
//! A report is produced once per submission and never mutated, so every type
//! here is plain data. Collections are `Vec`s in a fixed order so that two
//! reports built from the same inputs serialize identically.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Personality
// ---------------------------------------------------------------------------

/// Qualitative band of a standardized primary-factor score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FactorLevel {
    VeryLow,
    Low,
    Average,
    High,
    VeryHigh,
}

impl FactorLevel {
    pub fn is_high(&self) -> bool {
        matches!(self, FactorLevel::High | FactorLevel::VeryHigh)
    }

    pub fn is_low(&self) -> bool {
        matches!(self, FactorLevel::Low | FactorLevel::VeryLow)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    pub factor: String,
    pub description: String,
    pub raw_score: f64,
    pub standardized_score: i64,
    pub percentile: u8,
    pub level: FactorLevel,
    pub implications: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlobalLevel {
    High,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalFactor {
    pub name: String,
    pub score: i64,
    pub level: GlobalLevel,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    /// Scored primary factors in roster order. Factors without answers are absent.
    pub primary_factors: Vec<FactorScore>,
    pub global_factors: Vec<GlobalFactor>,
    pub personality_type: String,
    pub work_styles: Vec<String>,
    pub leadership_potential: String,
}

impl PersonalityProfile {
    pub fn global(&self, name: &str) -> Option<&GlobalFactor> {
        self.global_factors.iter().find(|g| g.name == name)
    }
}

// ---------------------------------------------------------------------------
// Cognitive
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveProfile {
    /// IQ-like score on a 40–200 scale.
    pub overall_score: i64,
    pub verbal_reasoning: u32,
    pub numerical_reasoning: u32,
    pub logical_reasoning: u32,
    pub spatial_reasoning: u32,
    pub processing_speed: u32,
    pub working_memory: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggested_roles: Vec<String>,
}

// ---------------------------------------------------------------------------
// Communication / Technical / Culture
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationProfile {
    pub verbal_communication: u32,
    pub written_communication: u32,
    pub active_listening: u32,
    pub presentation_skills: u32,
    pub interpersonal_skills: u32,
    pub communication_style: String,
    pub improvement_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalProfile {
    pub problem_solving: u32,
    pub technical_knowledge: u32,
    pub analytical_thinking: u32,
    pub attention_to_detail: u32,
    pub learning_agility: u32,
    pub proficiency_level: String,
    pub training_recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalFitProfile {
    pub values_alignment: u32,
    pub teamwork: u32,
    pub adaptability: u32,
    pub work_ethic: u32,
    pub innovation: u32,
    pub fit_level: String,
    pub fit_recommendations: Vec<String>,
}

/// The single test-kind-specific sub-report embedded in an assessment report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainAnalysis {
    PersonalityFactors(PersonalityProfile),
    CognitiveAbilities(CognitiveProfile),
    CommunicationSkills(CommunicationProfile),
    TechnicalAptitude(TechnicalProfile),
    CulturalFit(CulturalFitProfile),
}

impl DomainAnalysis {
    pub fn as_personality(&self) -> Option<&PersonalityProfile> {
        match self {
            DomainAnalysis::PersonalityFactors(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_cognitive(&self) -> Option<&CognitiveProfile> {
        match self {
            DomainAnalysis::CognitiveAbilities(c) => Some(c),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Reliability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReliabilityVerdict {
    #[serde(rename = "Reliable")]
    Reliable,
    #[serde(rename = "Invalid")]
    Invalid,
    #[serde(rename = "Questionable - Too Fast")]
    TooFast,
    #[serde(rename = "Questionable - Too Slow")]
    TooSlow,
    #[serde(rename = "Questionable - Pattern Responding")]
    PatternResponding,
}

impl ReliabilityVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReliabilityVerdict::Reliable => "Reliable",
            ReliabilityVerdict::Invalid => "Invalid",
            ReliabilityVerdict::TooFast => "Questionable - Too Fast",
            ReliabilityVerdict::TooSlow => "Questionable - Too Slow",
            ReliabilityVerdict::PatternResponding => "Questionable - Pattern Responding",
        }
    }

    pub fn is_reliable(&self) -> bool {
        matches!(self, ReliabilityVerdict::Reliable)
    }
}

impl std::fmt::Display for ReliabilityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub hiring: String,
    pub development: Vec<String>,
    pub placement: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// 0–100.
    pub overall_score: u32,
    pub reliability: ReliabilityVerdict,
    /// Seconds.
    pub completion_time: u64,
    /// Absent only when the test kind has no scorer.
    pub domain_analysis: Option<DomainAnalysis>,
    pub interpretations: Vec<String>,
    pub recommendations: Recommendations,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub risk_factors: Vec<String>,
    /// 0–100.
    pub verification_score: u32,
}
