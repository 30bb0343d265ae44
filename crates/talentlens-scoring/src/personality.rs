//! Personality scoring: primary factor scores, then the composites, typology
//! and work styles built on top of them.
//!
//! For each factor with at least one answer:
//!
//! ```text
//! raw          = mean(values)
//! standardized = round(raw × 2)
//! percentile   = clamp(round((standardized − 1) × 11.11), 1, 99)
//! ```
//!
//! Factors without answers are omitted, never zero-filled.

use std::collections::BTreeMap;

use talentlens_common::model::TestKind;
use talentlens_common::report::{DomainAnalysis, FactorLevel, FactorScore, PersonalityProfile};
use tracing::debug;

use crate::aggregator::{aggregate, numeric_value, Aggregation};
use crate::domain::{DomainInsights, DomainOutcome, DomainScorer, ScoringContext};
use crate::global_factors::synthesize_global_factors;
use crate::normalise::{clamp_score, mean, round_half_up};
use crate::roster::{PrimaryFactor, ANXIETY};
use crate::typology::{archetype_placement, classify_archetype, leadership_potential, work_styles, LeadershipPotential};

/// Which pole of a factor the implications lookup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pole {
    Low,
    High,
}

const IMPLICATIONS: &[(PrimaryFactor, Pole, &[&str])] = &[
    (PrimaryFactor::Warmth, Pole::High, &["Builds rapport quickly", "Thrives in people-focused roles"]),
    (PrimaryFactor::Warmth, Pole::Low, &["Prefers task-focused work", "May appear distant to colleagues"]),
    (PrimaryFactor::Dominance, Pole::High, &["Takes charge in group settings", "May override quieter voices"]),
    (PrimaryFactor::Dominance, Pole::Low, &["Cooperative and accommodating", "May avoid necessary conflict"]),
    (PrimaryFactor::EmotionalStability, Pole::High, &["Handles pressure calmly", "Recovers quickly from setbacks"]),
    (PrimaryFactor::EmotionalStability, Pole::Low, &["May be affected by stress", "Benefits from a supportive environment"]),
    (PrimaryFactor::RuleConsciousness, Pole::High, &["Follows procedures reliably", "Suited to compliance-sensitive work"]),
    (PrimaryFactor::RuleConsciousness, Pole::Low, &["Flexible with rules", "May need clear expectations"]),
    (PrimaryFactor::OpennessToChange, Pole::High, &["Embraces new ideas", "Drives improvement initiatives"]),
    (PrimaryFactor::OpennessToChange, Pole::Low, &["Values proven methods", "Provides stability during change"]),
    (PrimaryFactor::Perfectionism, Pole::High, &["Organized and thorough", "May struggle with ambiguity"]),
    (PrimaryFactor::Perfectionism, Pole::Low, &["Comfortable with loose structure", "May overlook details"]),
];

pub fn standardize(raw_score: f64) -> i64 {
    round_half_up(raw_score * 2.0) as i64
}

pub fn percentile(standardized: i64) -> u8 {
    round_half_up((standardized as f64 - 1.0) * 11.11).clamp(1.0, 99.0) as u8
}

pub fn factor_level(standardized: i64) -> FactorLevel {
    match standardized {
        s if s <= 2 => FactorLevel::VeryLow,
        s if s <= 4 => FactorLevel::Low,
        s if s <= 6 => FactorLevel::Average,
        s if s <= 8 => FactorLevel::High,
        _ => FactorLevel::VeryHigh,
    }
}

/// Fixed implications for a factor at a given score; empty when none are listed.
pub fn implications(factor: PrimaryFactor, standardized: i64) -> Vec<String> {
    let pole = if standardized <= 4 { Pole::Low } else { Pole::High };
    IMPLICATIONS
        .iter()
        .find(|(f, p, _)| *f == factor && *p == pole)
        .map(|(_, _, lines)| lines.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

/// Scored primary factors, keyed in roster order.
#[derive(Debug, Clone, Default)]
pub struct PrimaryScores {
    scores: BTreeMap<PrimaryFactor, FactorScore>,
}

impl PrimaryScores {
    pub fn from_aggregation(agg: &Aggregation<PrimaryFactor>) -> Self {
        let scores = agg
            .groups
            .iter()
            .filter_map(|(&factor, values)| {
                let raw_score = mean(values)?;
                Some((factor, score_factor(factor, raw_score)))
            })
            .collect();
        Self { scores }
    }

    pub fn get(&self, factor: PrimaryFactor) -> Option<&FactorScore> {
        self.scores.get(&factor)
    }

    /// Standardized score, 0 when the factor was not scored.
    pub fn standardized(&self, factor: PrimaryFactor) -> f64 {
        self.scores
            .get(&factor)
            .map(|s| s.standardized_score as f64)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PrimaryFactor, &FactorScore)> {
        self.scores.iter()
    }

    pub fn into_vec(self) -> Vec<FactorScore> {
        self.scores.into_values().collect()
    }
}

fn score_factor(factor: PrimaryFactor, raw_score: f64) -> FactorScore {
    let def = factor.definition();
    let standardized = standardize(raw_score);
    FactorScore {
        factor: def.label.to_string(),
        description: def.description.to_string(),
        raw_score,
        standardized_score: standardized,
        percentile: percentile(standardized),
        level: factor_level(standardized),
        implications: implications(factor, standardized),
    }
}

/// Build the full personality profile from already aggregated answers.
pub fn build_profile(agg: &Aggregation<PrimaryFactor>) -> (PersonalityProfile, LeadershipPotential, u32) {
    let scores = PrimaryScores::from_aggregation(agg);

    let global_factors = synthesize_global_factors(&scores);
    let personality_type = classify_archetype(&scores);
    let styles = work_styles(&scores);
    let leadership = leadership_potential(&scores);

    // Overall: mean standardized score on a 0–100 scale.
    let standardized: Vec<f64> = scores.iter().map(|(_, s)| s.standardized_score as f64).collect();
    let overall = mean(&standardized).map(|m| clamp_score(m * 10.0)).unwrap_or(0);

    debug!(
        scored = scores.len(),
        archetype = personality_type,
        overall,
        "Personality factors scored"
    );

    let profile = PersonalityProfile {
        primary_factors: scores.into_vec(),
        global_factors,
        personality_type: personality_type.to_string(),
        work_styles: styles,
        leadership_potential: leadership.label().to_string(),
    };
    (profile, leadership, overall)
}

pub struct PersonalityScorer;

impl DomainScorer for PersonalityScorer {
    fn kind(&self) -> TestKind {
        TestKind::Personality
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DomainOutcome {
        let agg = aggregate(ctx.definition, ctx.responses, PrimaryFactor::from_label, numeric_value);
        let (profile, leadership, overall_score) = build_profile(&agg);
        let insights = personality_insights(&profile, leadership, ctx);

        DomainOutcome {
            analysis: DomainAnalysis::PersonalityFactors(profile),
            overall_score,
            insights,
        }
    }
}

fn personality_insights(
    profile: &PersonalityProfile,
    leadership: LeadershipPotential,
    ctx: &ScoringContext<'_>,
) -> DomainInsights {
    let mut insights = DomainInsights::default();

    insights.interpretations.push(format!("Personality Type: {}", profile.personality_type));
    insights.interpretations.push(format!("Work Style: {}", profile.work_styles.join(", ")));
    insights.interpretations.push(format!("Leadership Assessment: {}", profile.leadership_potential));

    for factor in &profile.primary_factors {
        if factor.level.is_high() {
            insights.strengths.push(factor.factor.clone());
        } else if factor.level.is_low() {
            insights.improvement_areas.push(factor.factor.clone());
        }
    }

    match leadership {
        LeadershipPotential::High => {
            insights.development.push("Leadership development program".to_string());
            insights.placement.push("Consider for leadership or management track".to_string());
        }
        LeadershipPotential::Moderate => {
            insights.development.push("Mentoring to build emerging leadership skills".to_string());
        }
        LeadershipPotential::IndividualContributor => {}
    }

    if let Some(fit) = archetype_placement(&profile.personality_type) {
        insights.placement.push(fit.to_string());
    }

    if let Some(anxiety) = profile.global(ANXIETY) {
        if anxiety.score > ctx.config.risk.anxiety_threshold {
            insights
                .risk_factors
                .push("High anxiety levels may affect performance under pressure".to_string());
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmth_four_and_five() {
        let mut agg = Aggregation::default();
        agg.groups.insert(PrimaryFactor::Warmth, vec![4.0, 5.0]);
        let scores = PrimaryScores::from_aggregation(&agg);
        let warmth = scores.get(PrimaryFactor::Warmth).unwrap();

        assert_eq!(warmth.raw_score, 4.5);
        assert_eq!(warmth.standardized_score, 9);
        assert_eq!(warmth.level, FactorLevel::VeryHigh);
        assert_eq!(warmth.percentile, 89);
        assert_eq!(warmth.factor, "Warmth (A)");
        assert!(!warmth.implications.is_empty());
    }

    #[test]
    fn test_factors_without_answers_are_omitted() {
        let mut agg = Aggregation::default();
        agg.groups.insert(PrimaryFactor::Tension, vec![3.0]);
        let scores = PrimaryScores::from_aggregation(&agg);
        assert_eq!(scores.len(), 1);
        assert!(scores.get(PrimaryFactor::Warmth).is_none());
        assert_eq!(scores.standardized(PrimaryFactor::Warmth), 0.0);
    }

    #[test]
    fn test_percentile_bounds_and_monotonic() {
        let mut previous = 0;
        for s in -5..=20 {
            let p = percentile(s);
            assert!((1..=99).contains(&p), "percentile {p} for {s}");
            assert!(p >= previous);
            previous = p;
        }
        assert_eq!(percentile(1), 1);
        assert_eq!(percentile(10), 99);
    }

    #[test]
    fn test_extreme_scores_saturate_without_overflow() {
        assert_eq!(standardize(-1e300), i64::MIN);
        assert_eq!(standardize(1e300), i64::MAX);
        assert_eq!(percentile(i64::MIN), 1);
        assert_eq!(percentile(i64::MAX), 99);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(factor_level(2), FactorLevel::VeryLow);
        assert_eq!(factor_level(3), FactorLevel::Low);
        assert_eq!(factor_level(6), FactorLevel::Average);
        assert_eq!(factor_level(8), FactorLevel::High);
        assert_eq!(factor_level(9), FactorLevel::VeryHigh);
    }

    #[test]
    fn test_unknown_implication_is_empty() {
        assert!(implications(PrimaryFactor::Vigilance, 9).is_empty());
        assert_eq!(implications(PrimaryFactor::Warmth, 4)[0], "Prefers task-focused work");
    }

    #[test]
    fn test_overall_is_mean_standardized_times_ten() {
        let mut agg = Aggregation::default();
        agg.groups.insert(PrimaryFactor::Warmth, vec![4.0]); // 8
        agg.groups.insert(PrimaryFactor::Dominance, vec![3.0]); // 6
        let (_, _, overall) = build_profile(&agg);
        assert_eq!(overall, 70);
    }
}
