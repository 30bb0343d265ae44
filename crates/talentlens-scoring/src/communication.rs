//! Communication skills scorer.

use talentlens_common::model::TestKind;
use talentlens_common::report::{CommunicationProfile, DomainAnalysis};

use crate::domain::{DomainInsights, DomainOutcome, DomainScorer, ScoringContext};
use crate::templates::{score_template, Bands, Dimension, TemplateScores};

pub static DIMENSIONS: [Dimension; 5] = [
    Dimension { name: "Verbal Communication", aliases: &["verbal", "verbal_communication", "speaking"] },
    Dimension { name: "Written Communication", aliases: &["written", "writing", "written_communication"] },
    Dimension { name: "Active Listening", aliases: &["listening", "active_listening"] },
    Dimension { name: "Presentation Skills", aliases: &["presentation", "presentation_skills", "public_speaking"] },
    Dimension { name: "Interpersonal Skills", aliases: &["interpersonal", "interpersonal_skills", "empathy"] },
];

pub const BANDS: Bands = [
    "Excellent Communicator",
    "Effective Communicator",
    "Developing Communicator",
    "Needs Communication Support",
];

pub fn build_profile(scores: &TemplateScores) -> CommunicationProfile {
    CommunicationProfile {
        verbal_communication: scores.score(0),
        written_communication: scores.score(1),
        active_listening: scores.score(2),
        presentation_skills: scores.score(3),
        interpersonal_skills: scores.score(4),
        communication_style: scores.band.to_string(),
        improvement_areas: scores.weak().map(|s| format!("Strengthen {}", s.name)).collect(),
    }
}

pub struct CommunicationScorer;

impl DomainScorer for CommunicationScorer {
    fn kind(&self) -> TestKind {
        TestKind::Communication
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> DomainOutcome {
        let scores = score_template(ctx, &DIMENSIONS, &BANDS);
        let profile = build_profile(&scores);

        let mut insights = DomainInsights::default();
        insights.interpretations.push(format!("Communication Style: {}", profile.communication_style));
        insights.strengths.extend(scores.strong().map(|s| s.name.to_string()));
        insights.improvement_areas.extend(scores.weak().map(|s| s.name.to_string()));
        insights.development.extend(profile.improvement_areas.iter().cloned());
        if scores.band == BANDS[0] || scores.band == BANDS[1] {
            insights.placement.push("Client-facing or cross-team coordination roles".to_string());
        }

        DomainOutcome {
            analysis: DomainAnalysis::CommunicationSkills(profile),
            overall_score: scores.overall,
            insights,
        }
    }
}
