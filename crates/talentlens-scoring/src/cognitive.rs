//! Cognitive scoring over correctness-graded answers.
//!
//! ```text
//! iq          = round(correct / total × 160 + 40)      (no upper clamp)
//! sub-ability = round(correct / total × 100)           (50 with no answers)
//! ```

use talentlens_common::model::TestKind;
use talentlens_common::report::{CognitiveProfile, DomainAnalysis};
use tracing::debug;

use crate::aggregator::{aggregate, graded_value, normalise_label, Aggregation};
use crate::domain::{DomainInsights, DomainOutcome, DomainScorer, ScoringContext};
use crate::normalise::{ratio_percent, round_half_up};

/// Sub-ability score when its category had no graded answers.
pub const DEFAULT_ABILITY_SCORE: u32 = 50;
pub const STRENGTH_THRESHOLD: u32 = 75;
pub const WEAKNESS_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CognitiveAbility {
    Verbal,
    Numerical,
    Logical,
    Spatial,
    ProcessingSpeed,
    WorkingMemory,
}

const ABILITIES: [(CognitiveAbility, &str, &[&str]); 6] = [
    (CognitiveAbility::Verbal, "Verbal Reasoning", &["verbal", "verbal_reasoning"]),
    (CognitiveAbility::Numerical, "Numerical Reasoning", &["numerical", "numerical_reasoning", "numeric"]),
    (CognitiveAbility::Logical, "Logical Reasoning", &["logical", "logical_reasoning", "logic"]),
    (CognitiveAbility::Spatial, "Spatial Reasoning", &["spatial", "spatial_reasoning"]),
    (CognitiveAbility::ProcessingSpeed, "Processing Speed", &["speed", "processing_speed"]),
    (CognitiveAbility::WorkingMemory, "Working Memory", &["memory", "working_memory"]),
];

impl CognitiveAbility {
    pub fn label(self) -> &'static str {
        ABILITIES[self as usize].1
    }

    pub fn from_category(label: &str) -> Option<Self> {
        let wanted = normalise_label(label);
        ABILITIES
            .iter()
            .find(|(_, _, aliases)| aliases.contains(&wanted.as_str()))
            .map(|(ability, _, _)| *ability)
    }

    pub fn all() -> impl Iterator<Item = CognitiveAbility> {
        ABILITIES.iter().map(|(ability, _, _)| *ability)
    }
}

/// IQ-like score from the overall correct ratio. An empty test scores 40.
pub fn iq_score(correct: f64, total: f64) -> i64 {
    let ratio = if total > 0.0 { correct / total } else { 0.0 };
    round_half_up(ratio * 160.0 + 40.0) as i64
}

pub fn iq_band(iq: i64) -> &'static str {
    match iq {
        i if i >= 130 => "Very Superior",
        i if i >= 120 => "Superior",
        i if i >= 110 => "High Average",
        i if i >= 90 => "Average",
        i if i >= 80 => "Low Average",
        _ => "Below Average",
    }
}

pub fn ability_score(agg: &Aggregation<CognitiveAbility>, ability: CognitiveAbility) -> u32 {
    agg.values(&ability)
        .and_then(|values| ratio_percent(values.iter().sum(), values.len() as f64))
        .unwrap_or(DEFAULT_ABILITY_SCORE)
}

/// Role suggestions: one tier by overall score, plus ability-specific roles.
pub fn suggested_roles(iq: i64, verbal: u32, numerical: u32, logical: u32) -> Vec<String> {
    let mut roles: Vec<&str> = Vec::new();

    if iq >= 120 {
        roles.extend(["Strategic Planning", "Research & Development", "Senior Management"]);
    } else if iq >= 110 {
        roles.extend(["Project Management", "Technical Specialist", "Team Leadership"]);
    } else if iq >= 100 {
        roles.extend(["Operations", "Customer Service", "Administration"]);
    }

    if numerical >= STRENGTH_THRESHOLD {
        roles.extend(["Financial Analysis", "Data Analytics"]);
    }
    if verbal >= STRENGTH_THRESHOLD {
        roles.extend(["Communications", "Content Strategy"]);
    }
    if logical >= STRENGTH_THRESHOLD {
        roles.extend(["Software Engineering", "Systems Analysis"]);
    }

    roles.into_iter().map(str::to_string).collect()
}

/// Build the cognitive profile and the 0–100 percent-correct score.
pub fn build_profile(agg: &Aggregation<CognitiveAbility>) -> (CognitiveProfile, u32) {
    let total = agg.all_values().count() as f64;
    let correct: f64 = agg.all_values().sum();
    let iq = iq_score(correct, total);

    let scores: Vec<(CognitiveAbility, u32)> = CognitiveAbility::all()
        .map(|ability| (ability, ability_score(agg, ability)))
        .collect();
    let score_of = |ability: CognitiveAbility| scores[ability as usize].1;

    let strengths = scores
        .iter()
        .filter(|(_, s)| *s >= STRENGTH_THRESHOLD)
        .map(|(a, _)| a.label().to_string())
        .collect();
    let weaknesses = scores
        .iter()
        .filter(|(_, s)| *s < WEAKNESS_THRESHOLD)
        .map(|(a, _)| a.label().to_string())
        .collect();

    let profile = CognitiveProfile {
        overall_score: iq,
        verbal_reasoning: score_of(CognitiveAbility::Verbal),
        numerical_reasoning: score_of(CognitiveAbility::Numerical),
        logical_reasoning: score_of(CognitiveAbility::Logical),
        spatial_reasoning: score_of(CognitiveAbility::Spatial),
        processing_speed: score_of(CognitiveAbility::ProcessingSpeed),
        working_memory: score_of(CognitiveAbility::WorkingMemory),
        strengths,
        weaknesses,
        suggested_roles: suggested_roles(
            iq,
            score_of(CognitiveAbility::Verbal),
            score_of(CognitiveAbility::Numerical),
            score_of(CognitiveAbility::Logical),
        ),
    };

    let overall = ratio_percent(correct, total).unwrap_or(0);
    debug!(graded = total as usize, correct = correct as usize, iq, "Cognitive answers graded");
    (profile, overall)
}

pub struct CognitiveScorer;

impl DomainScorer for CognitiveScorer {
    fn kind(&self) -> TestKind {
        TestKind::Cognitive
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DomainOutcome {
        let agg = aggregate(ctx.definition, ctx.responses, CognitiveAbility::from_category, graded_value);
        let (profile, overall_score) = build_profile(&agg);
        let insights = cognitive_insights(&profile);

        DomainOutcome {
            analysis: DomainAnalysis::CognitiveAbilities(profile),
            overall_score,
            insights,
        }
    }
}

fn cognitive_insights(profile: &CognitiveProfile) -> DomainInsights {
    let mut insights = DomainInsights::default();

    insights.interpretations.push(format!(
        "Cognitive Level: IQ {} ({})",
        profile.overall_score,
        iq_band(profile.overall_score)
    ));
    if !profile.strengths.is_empty() {
        let top: Vec<&str> = profile.strengths.iter().take(3).map(String::as_str).collect();
        insights.interpretations.push(format!("Cognitive Strengths: {}", top.join(", ")));
    }

    insights.strengths.extend(profile.strengths.iter().cloned());
    insights.improvement_areas.extend(profile.weaknesses.iter().cloned());
    insights.development.extend(
        profile
            .weaknesses
            .iter()
            .map(|w| format!("Targeted training in {w}")),
    );
    insights.placement.extend(profile.suggested_roles.iter().cloned());

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(pairs: &[(CognitiveAbility, &[f64])]) -> Aggregation<CognitiveAbility> {
        let mut agg = Aggregation::default();
        for (ability, values) in pairs {
            agg.groups.insert(*ability, values.to_vec());
        }
        agg
    }

    #[test]
    fn test_eight_of_ten_numerical() {
        let values = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0];
        let (profile, overall) = build_profile(&agg(&[(CognitiveAbility::Numerical, &values)]));

        assert_eq!(profile.overall_score, 168);
        assert_eq!(profile.numerical_reasoning, 80);
        assert_eq!(profile.verbal_reasoning, 50);
        assert_eq!(profile.working_memory, 50);
        assert_eq!(profile.strengths, vec!["Numerical Reasoning"]);
        assert!(profile.weaknesses.is_empty());
        assert_eq!(overall, 80);
    }

    #[test]
    fn test_empty_test_scores_forty() {
        let (profile, overall) = build_profile(&Aggregation::default());
        assert_eq!(profile.overall_score, 40);
        assert_eq!(overall, 0);
        assert!(profile.strengths.is_empty() && profile.weaknesses.is_empty());
    }

    #[test]
    fn test_quarantined_answers_count_toward_iq_only() {
        let mut a = agg(&[(CognitiveAbility::Verbal, &[1.0])]);
        a.quarantined.insert("abstract".to_string(), vec![0.0]);
        let (profile, _) = build_profile(&a);
        assert_eq!(profile.overall_score, 120);
        assert_eq!(profile.verbal_reasoning, 100);
    }

    #[test]
    fn test_weakness_below_fifty() {
        let (profile, _) = build_profile(&agg(&[(CognitiveAbility::Spatial, &[1.0, 0.0, 0.0])]));
        assert_eq!(profile.spatial_reasoning, 33);
        assert_eq!(profile.weaknesses, vec!["Spatial Reasoning"]);
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!(CognitiveAbility::from_category("Working Memory"), Some(CognitiveAbility::WorkingMemory));
        assert_eq!(CognitiveAbility::from_category("speed"), Some(CognitiveAbility::ProcessingSpeed));
        assert_eq!(CognitiveAbility::from_category("emotional"), None);
    }

    #[test]
    fn test_role_tiers() {
        let roles = suggested_roles(125, 50, 80, 50);
        assert_eq!(
            roles,
            vec!["Strategic Planning", "Research & Development", "Senior Management", "Financial Analysis", "Data Analytics"]
        );
        assert!(suggested_roles(95, 50, 50, 50).is_empty());
        assert_eq!(suggested_roles(105, 50, 50, 90)[3], "Software Engineering");
    }

    #[test]
    fn test_iq_bands() {
        assert_eq!(iq_band(168), "Very Superior");
        assert_eq!(iq_band(100), "Average");
        assert_eq!(iq_band(40), "Below Average");
    }
}
