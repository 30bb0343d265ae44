//! Technical aptitude scorer.

use talentlens_common::model::TestKind;
use talentlens_common::report::{DomainAnalysis, TechnicalProfile};

use crate::domain::{DomainInsights, DomainOutcome, DomainScorer, ScoringContext};
use crate::templates::{score_template, Bands, Dimension, TemplateScores};

pub static DIMENSIONS: [Dimension; 5] = [
    Dimension { name: "Problem Solving", aliases: &["problem_solving", "problems"] },
    Dimension { name: "Technical Knowledge", aliases: &["technical", "technical_knowledge", "knowledge"] },
    Dimension { name: "Analytical Thinking", aliases: &["analytical", "analytical_thinking", "analysis"] },
    Dimension { name: "Attention to Detail", aliases: &["detail", "attention_to_detail"] },
    Dimension { name: "Learning Agility", aliases: &["learning", "learning_agility"] },
];

pub const BANDS: Bands = ["Advanced", "Proficient", "Intermediate", "Foundational"];

pub fn build_profile(scores: &TemplateScores) -> TechnicalProfile {
    TechnicalProfile {
        problem_solving: scores.score(0),
        technical_knowledge: scores.score(1),
        analytical_thinking: scores.score(2),
        attention_to_detail: scores.score(3),
        learning_agility: scores.score(4),
        proficiency_level: scores.band.to_string(),
        training_recommendations: scores.weak().map(|s| format!("Training in {}", s.name)).collect(),
    }
}

fn placement_for(band: &str) -> Option<&'static str> {
    match band {
        "Advanced" => Some("Senior technical or architecture roles"),
        "Proficient" => Some("Mid-level technical roles"),
        "Intermediate" => Some("Junior technical roles with mentoring"),
        _ => None,
    }
}

pub struct TechnicalScorer;

impl DomainScorer for TechnicalScorer {
    fn kind(&self) -> TestKind {
        TestKind::Technical
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DomainOutcome {
        let scores = score_template(ctx, &DIMENSIONS, &BANDS);
        let profile = build_profile(&scores);

        let mut insights = DomainInsights::default();
        insights.interpretations.push(format!("Technical Proficiency: {}", profile.proficiency_level));
        insights.strengths.extend(scores.strong().map(|s| s.name.to_string()));
        insights.improvement_areas.extend(scores.weak().map(|s| s.name.to_string()));
        insights.development.extend(profile.training_recommendations.iter().cloned());
        if let Some(placement) = placement_for(scores.band) {
            insights.placement.push(placement.to_string());
        }

        DomainOutcome {
            analysis: DomainAnalysis::TechnicalAptitude(profile),
            overall_score: scores.overall,
            insights,
        }
    }
}
