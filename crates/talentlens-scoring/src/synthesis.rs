//! Interpretation and recommendation synthesis.
//!
//! Pure aggregation over the domain outcome and the reliability verdict; no
//! scoring happens here.

use talentlens_common::engine_config::{EngineConfig, RecommendationConfig, VerificationConfig};
use talentlens_common::report::{AssessmentReport, Recommendations};
use talentlens_common::ReliabilityVerdict;

use crate::domain::{DomainInsights, DomainOutcome};

const GENERIC_DEVELOPMENT: [&str; 2] = ["Regular performance reviews", "Continuous learning opportunities"];

/// Everything the synthesizer consumes.
#[derive(Debug, Clone)]
pub struct SynthesisInput {
    pub overall_score: u32,
    pub reliability: ReliabilityVerdict,
    pub completion_seconds: u64,
    pub domain: Option<DomainOutcome>,
}

pub fn performance_band(score: u32) -> &'static str {
    match score {
        s if s >= 90 => "Exceptional",
        s if s >= 75 => "Above Average",
        s if s >= 60 => "Average",
        s if s >= 50 => "Below Average",
        _ => "Poor",
    }
}

pub fn hiring_recommendation(score: u32, config: &RecommendationConfig) -> &'static str {
    if score >= config.highly_recommended_threshold {
        "Highly recommended for the position"
    } else if score >= config.recommended_threshold {
        "Recommended for the position with development support"
    } else {
        "Consider for entry-level positions with extensive training"
    }
}

/// Start at 100, apply each deduction that applies, clamp to [0, 100].
pub fn verification_score(
    overall_score: u32,
    reliability: ReliabilityVerdict,
    completion_seconds: u64,
    config: &EngineConfig,
) -> u32 {
    let VerificationConfig {
        unreliable_penalty,
        too_fast_penalty,
        too_slow_penalty,
        low_score_penalty,
        low_score_cutoff,
    } = config.verification;

    let mut score: i64 = 100;
    if !reliability.is_reliable() {
        score -= unreliable_penalty as i64;
    }
    if completion_seconds < config.reliability.min_completion_seconds {
        score -= too_fast_penalty as i64;
    }
    if completion_seconds > config.reliability.max_completion_seconds {
        score -= too_slow_penalty as i64;
    }
    if overall_score < low_score_cutoff {
        score -= low_score_penalty as i64;
    }
    score.clamp(0, 100) as u32
}

pub fn synthesize(input: SynthesisInput, config: &EngineConfig) -> AssessmentReport {
    let SynthesisInput {
        overall_score,
        reliability,
        completion_seconds,
        domain,
    } = input;

    let (analysis, insights) = match domain {
        Some(outcome) => (Some(outcome.analysis), outcome.insights),
        None => (None, DomainInsights::default()),
    };
    let DomainInsights {
        interpretations: domain_lines,
        strengths,
        improvement_areas,
        development: domain_development,
        placement,
        risk_factors: domain_risks,
    } = insights;

    let mut interpretations = domain_lines;
    interpretations.push(format!("Response Reliability: {reliability}"));
    interpretations.push(format!(
        "Overall Performance: {} ({overall_score}/100)",
        performance_band(overall_score)
    ));

    let mut development = domain_development;
    development.extend(GENERIC_DEVELOPMENT.iter().map(|s| s.to_string()));

    let mut risk_factors = Vec::new();
    if !reliability.is_reliable() {
        risk_factors.push(format!("Response reliability concern: {reliability}"));
    }
    if overall_score < config.risk.low_performance_threshold {
        risk_factors.push("Low overall performance score".to_string());
    }
    risk_factors.extend(domain_risks);

    AssessmentReport {
        overall_score,
        reliability,
        completion_time: completion_seconds,
        domain_analysis: analysis,
        interpretations,
        recommendations: Recommendations {
            hiring: hiring_recommendation(overall_score, &config.recommendations).to_string(),
            development,
            placement,
        },
        strengths,
        areas_for_improvement: improvement_areas,
        risk_factors,
        verification_score: verification_score(overall_score, reliability, completion_seconds, config),
    }
}
