//! Culture fit scorer.

use talentlens_common::model::TestKind;
use talentlens_common::report::{CulturalFitProfile, DomainAnalysis};

use crate::domain::{DomainInsights, DomainOutcome, DomainScorer, ScoringContext};
use crate::templates::{score_template, Bands, Dimension, TemplateScores};

pub static DIMENSIONS: [Dimension; 5] = [
    Dimension { name: "Values Alignment", aliases: &["values", "values_alignment"] },
    Dimension { name: "Teamwork", aliases: &["teamwork", "collaboration"] },
    Dimension { name: "Adaptability", aliases: &["adaptability", "change", "flexibility"] },
    Dimension { name: "Work Ethic", aliases: &["work_ethic", "ethic", "integrity"] },
    Dimension { name: "Innovation", aliases: &["innovation", "creativity"] },
];

pub const BANDS: Bands = ["Strong Fit", "Good Fit", "Moderate Fit", "Limited Fit"];

pub fn build_profile(scores: &TemplateScores) -> CulturalFitProfile {
    let mut recommendations = Vec::new();
    if let Some(best) = scores.strongest() {
        recommendations.push(format!("Well suited to teams that value {}", best.name.to_lowercase()));
    }
    recommendations.extend(scores.weak().map(|s| format!("Onboarding focus on {}", s.name.to_lowercase())));

    CulturalFitProfile {
        values_alignment: scores.score(0),
        teamwork: scores.score(1),
        adaptability: scores.score(2),
        work_ethic: scores.score(3),
        innovation: scores.score(4),
        fit_level: scores.band.to_string(),
        fit_recommendations: recommendations,
    }
}

pub struct CultureScorer;

impl DomainScorer for CultureScorer {
    fn kind(&self) -> TestKind {
        TestKind::Culture
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DomainOutcome {
        let scores = score_template(ctx, &DIMENSIONS, &BANDS);
        let profile = build_profile(&scores);

        let mut insights = DomainInsights::default();
        insights.interpretations.push(format!("Cultural Fit: {}", profile.fit_level));
        insights.strengths.extend(scores.strong().map(|s| s.name.to_string()));
        insights.improvement_areas.extend(scores.weak().map(|s| s.name.to_string()));
        insights.placement.extend(profile.fit_recommendations.iter().cloned());

        DomainOutcome {
            analysis: DomainAnalysis::CulturalFit(profile),
            overall_score: scores.overall,
            insights,
        }
    }
}
