//! End-to-end personality scoring through the engine facade.

use talentlens_common::model::TestKind;
use talentlens_common::report::{FactorLevel, GlobalLevel};
use talentlens_common::ReliabilityVerdict;
use talentlens_scoring::score_assessment;
use talentlens_test_utils::pretty_assertions::assert_eq;
use talentlens_test_utils::{full_personality_definition, DefinitionBuilder, ResponsesBuilder};

#[test]
fn test_single_factor_report() {
    let def = DefinitionBuilder::new(TestKind::Personality)
        .question("q1", "Warmth (A)")
        .question("q2", "Warmth (A)")
        .build();
    let responses = ResponsesBuilder::new().answer("q1", "4").answer("q2", "5").build();

    let report = score_assessment(&def, &responses);
    let profile = report
        .domain_analysis
        .as_ref()
        .and_then(|d| d.as_personality())
        .expect("personality analysis");

    assert_eq!(profile.primary_factors.len(), 1);
    let warmth = &profile.primary_factors[0];
    assert_eq!(warmth.factor, "Warmth (A)");
    assert_eq!(warmth.raw_score, 4.5);
    assert_eq!(warmth.standardized_score, 9);
    assert_eq!(warmth.level, FactorLevel::VeryHigh);
    assert_eq!(warmth.percentile, 89);

    assert_eq!(profile.personality_type, "Balanced Professional");
    assert_eq!(profile.work_styles, vec!["Collaborative".to_string()]);
    assert_eq!(profile.leadership_potential, "Individual Contributor Strength");

    let extraversion = profile.global("Extraversion").unwrap();
    assert_eq!(extraversion.score, 2);
    assert_eq!(extraversion.level, GlobalLevel::Low);
    assert_eq!(profile.global("Anxiety").unwrap().score, -3);

    assert_eq!(report.overall_score, 90);
    assert_eq!(report.reliability, ReliabilityVerdict::Reliable);
    assert_eq!(report.verification_score, 100);
    assert_eq!(report.completion_time, 900);
    assert_eq!(report.recommendations.hiring, "Highly recommended for the position");
    assert_eq!(report.strengths, vec!["Warmth (A)".to_string()]);
    assert!(report.risk_factors.is_empty());
    assert_eq!(
        report.interpretations.last().unwrap(),
        "Overall Performance: Exceptional (90/100)"
    );
}

#[test]
fn test_aliases_resolve_and_unknown_labels_are_quarantined() {
    let def = DefinitionBuilder::new(TestKind::Personality)
        .question("q1", "warmth")
        .question("q2", "A")
        .question("q3", "Charisma")
        .build();
    let responses = ResponsesBuilder::new()
        .answer("q1", "3")
        .answer("q2", "4")
        .answer("q3", "5")
        .build();

    let report = score_assessment(&def, &responses);
    let profile = report.domain_analysis.as_ref().unwrap().as_personality().unwrap();

    assert_eq!(profile.primary_factors.len(), 1);
    assert_eq!(profile.primary_factors[0].raw_score, 3.5);
    assert_eq!(profile.primary_factors[0].standardized_score, 7);
}

#[test]
fn test_natural_leader_with_low_stability() {
    let def = DefinitionBuilder::new(TestKind::Personality)
        .question("w", "Warmth (A)")
        .question("d", "Dominance (E)")
        .question("r", "Reasoning (B)")
        .question("s", "Emotional Stability (C)")
        .question("o", "Apprehension (O)")
        .question("t", "Tension (Q4)")
        .build();
    // Warmth, Dominance, Reasoning 10; Stability 2; Apprehension, Tension 10.
    let responses = ResponsesBuilder::new()
        .answer("w", "5")
        .answer("d", "5")
        .answer("r", "5")
        .answer("s", "1")
        .answer("o", "5")
        .answer("t", "5")
        .build();

    let report = score_assessment(&def, &responses);
    let profile = report.domain_analysis.as_ref().unwrap().as_personality().unwrap();

    assert_eq!(profile.personality_type, "Natural Leader");
    // (10 + 10 - 2) / 3 = 6
    assert_eq!(profile.global("Anxiety").unwrap().score, 6);
    // (10 + 2 + 10 + 10) / 4 = 8
    assert_eq!(profile.leadership_potential, "High Leadership Potential");
    assert!(report
        .recommendations
        .placement
        .contains(&"Team lead or people-management roles".to_string()));
    assert!(report
        .recommendations
        .development
        .contains(&"Leadership development program".to_string()));
    assert!(report.areas_for_improvement.contains(&"Emotional Stability (C)".to_string()));
}

#[test]
fn test_full_roster_is_reported_in_roster_order() {
    let def = full_personality_definition(2);
    let mut builder = ResponsesBuilder::new();
    for (i, q) in def.questions.iter().enumerate() {
        builder = builder.answer(&q.id, if i % 2 == 0 { "3" } else { "4" });
    }
    let report = score_assessment(&def, &builder.build());
    let profile = report.domain_analysis.as_ref().unwrap().as_personality().unwrap();

    assert_eq!(profile.primary_factors.len(), 16);
    assert_eq!(profile.primary_factors[0].factor, "Warmth (A)");
    assert_eq!(profile.primary_factors[15].factor, "Tension (Q4)");
    assert_eq!(profile.global_factors.len(), 5);
    assert!(profile.primary_factors.iter().all(|f| f.standardized_score == 7));
}

fn anxiety_test() -> talentlens_common::model::TestDefinition {
    DefinitionBuilder::new(TestKind::Personality)
        .question("o", "Apprehension (O)")
        .question("t", "Tension (Q4)")
        .question("s", "Emotional Stability (C)")
        .build()
}

const ANXIETY_RISK: &str = "High anxiety levels may affect performance under pressure";

#[test]
fn test_high_anxiety_on_seven_point_scale_is_a_risk() {
    let responses = ResponsesBuilder::new()
        .answer("o", "7")
        .answer("t", "7")
        .answer("s", "1")
        .build();

    let report = score_assessment(&anxiety_test(), &responses);
    let profile = report.domain_analysis.as_ref().unwrap().as_personality().unwrap();

    // (14 + 14 - 2) / 3 = 8.67
    assert_eq!(profile.global("Anxiety").unwrap().score, 9);
    assert!(report.risk_factors.contains(&ANXIETY_RISK.to_string()));
}

#[test]
fn test_anxiety_of_exactly_seven_is_not_a_risk() {
    let responses = ResponsesBuilder::new()
        .answer("o", "6")
        .answer("t", "5.5")
        .answer("s", "1")
        .build();

    let report = score_assessment(&anxiety_test(), &responses);
    let profile = report.domain_analysis.as_ref().unwrap().as_personality().unwrap();

    // (12 + 11 - 2) / 3 = 7
    assert_eq!(profile.global("Anxiety").unwrap().score, 7);
    assert!(!report.risk_factors.contains(&ANXIETY_RISK.to_string()));
}

#[test]
fn test_extreme_numeric_answers_do_not_panic() {
    let def = DefinitionBuilder::new(TestKind::Personality)
        .question("q1", "Warmth (A)")
        .question("q2", "Tension (Q4)")
        .build();
    let responses = ResponsesBuilder::new().answer("q1", "-1e300").answer("q2", "1e300").build();

    let report = score_assessment(&def, &responses);
    let profile = report.domain_analysis.as_ref().unwrap().as_personality().unwrap();

    let warmth = &profile.primary_factors[0];
    assert_eq!(warmth.percentile, 1);
    assert_eq!(warmth.level, FactorLevel::VeryLow);
    let tension = &profile.primary_factors[1];
    assert_eq!(tension.percentile, 99);
    assert_eq!(tension.level, FactorLevel::VeryHigh);
    assert!(report.overall_score <= 100);
    assert!(report.verification_score <= 100);
}
