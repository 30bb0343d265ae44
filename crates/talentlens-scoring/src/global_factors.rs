//! Second-order composites computed from the primary factor scores.
//!
//! Formulas live in [`crate::roster::GLOBAL_FORMULAS`]. A primary factor that
//! was not scored contributes 0.

use talentlens_common::report::{GlobalFactor, GlobalLevel};

use crate::normalise::round_half_up;
use crate::personality::PrimaryScores;
use crate::roster::{GlobalFormula, GLOBAL_FORMULAS};

pub fn composite_score(formula: &GlobalFormula, scores: &PrimaryScores) -> i64 {
    let sum: f64 = formula
        .terms
        .iter()
        .map(|&(factor, sign)| sign * scores.standardized(factor))
        .sum();
    round_half_up(sum / formula.divisor) as i64
}

pub fn global_level(score: i64) -> GlobalLevel {
    if score > 5 { GlobalLevel::High } else { GlobalLevel::Low }
}

/// All five composites, in table order.
pub fn synthesize_global_factors(scores: &PrimaryScores) -> Vec<GlobalFactor> {
    GLOBAL_FORMULAS
        .iter()
        .map(|formula| {
            let score = composite_score(formula, scores);
            GlobalFactor {
                name: formula.name.to_string(),
                score,
                level: global_level(score),
                description: formula.description.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Aggregation;
    use crate::roster::{PrimaryFactor, ANXIETY, EXTRAVERSION, SELF_CONTROL};

    fn scores(pairs: &[(PrimaryFactor, f64)]) -> PrimaryScores {
        let mut agg = Aggregation::default();
        for &(factor, raw) in pairs {
            agg.groups.insert(factor, vec![raw]);
        }
        PrimaryScores::from_aggregation(&agg)
    }

    #[test]
    fn test_always_five_composites() {
        let globals = synthesize_global_factors(&PrimaryScores::default());
        assert_eq!(globals.len(), 5);
        assert!(globals.iter().all(|g| g.score == 0 && g.level == GlobalLevel::Low));
    }

    #[test]
    fn test_extraversion_subtracts_privateness() {
        // Warmth 8, Liveliness 8, Social Boldness 8, Privateness 4 → 20 / 4 = 5
        let s = scores(&[
            (PrimaryFactor::Warmth, 4.0),
            (PrimaryFactor::Liveliness, 4.0),
            (PrimaryFactor::SocialBoldness, 4.0),
            (PrimaryFactor::Privateness, 2.0),
        ]);
        let globals = synthesize_global_factors(&s);
        let extraversion = globals.iter().find(|g| g.name == EXTRAVERSION).unwrap();
        assert_eq!(extraversion.score, 5);
        assert_eq!(extraversion.level, GlobalLevel::Low);
    }

    #[test]
    fn test_anxiety_high() {
        // Apprehension 10, Tension 10, Emotional Stability 2 → 18 / 3 = 6
        let s = scores(&[
            (PrimaryFactor::Apprehension, 5.0),
            (PrimaryFactor::Tension, 5.0),
            (PrimaryFactor::EmotionalStability, 1.0),
        ]);
        let globals = synthesize_global_factors(&s);
        let anxiety = globals.iter().find(|g| g.name == ANXIETY).unwrap();
        assert_eq!(anxiety.score, 6);
        assert_eq!(anxiety.level, GlobalLevel::High);
    }

    #[test]
    fn test_negative_composite_rounds_half_up() {
        // Abstractedness 10 only → -10 / 3 = -3.33 → -3
        let s = scores(&[(PrimaryFactor::Abstractedness, 5.0)]);
        let globals = synthesize_global_factors(&s);
        let control = globals.iter().find(|g| g.name == SELF_CONTROL).unwrap();
        assert_eq!(control.score, -3);
    }
}
