//! Archetype, work-style, and leadership classification over primary scores.

use crate::personality::PrimaryScores;
use crate::roster::PrimaryFactor;

/// A factor "triggers" a rule when its standardized score exceeds this.
const TRIGGER: f64 = 6.0;

pub const DEFAULT_ARCHETYPE: &str = "Balanced Professional";

/// Evaluated top to bottom; the first rule whose factors all exceed the
/// trigger wins. Third column is the placement note for that archetype.
const ARCHETYPES: &[(&[PrimaryFactor], &str, &str)] = &[
    (&[PrimaryFactor::Dominance, PrimaryFactor::Warmth], "Natural Leader", "Team lead or people-management roles"),
    (&[PrimaryFactor::Warmth, PrimaryFactor::EmotionalStability], "Team Player", "Collaborative, cross-functional teams"),
    (&[PrimaryFactor::OpennessToChange, PrimaryFactor::Reasoning], "Innovator", "Product development or R&D initiatives"),
    (&[PrimaryFactor::EmotionalStability, PrimaryFactor::RuleConsciousness], "Reliable Executor", "Operations and process-driven roles"),
    (&[PrimaryFactor::SelfReliance], "Independent Contributor", "Autonomous specialist roles"),
];

const WORK_STYLES: &[(PrimaryFactor, &str)] = &[
    (PrimaryFactor::Warmth, "Collaborative"),
    (PrimaryFactor::Dominance, "Leadership-oriented"),
    (PrimaryFactor::SelfReliance, "Independent"),
    (PrimaryFactor::Perfectionism, "Detail-oriented"),
    (PrimaryFactor::OpennessToChange, "Adaptable"),
    (PrimaryFactor::RuleConsciousness, "Structured"),
];

const LEADERSHIP_FACTORS: [PrimaryFactor; 4] = [
    PrimaryFactor::Dominance,
    PrimaryFactor::EmotionalStability,
    PrimaryFactor::Warmth,
    PrimaryFactor::Reasoning,
];

fn triggers(scores: &PrimaryScores, factor: PrimaryFactor) -> bool {
    scores.standardized(factor) > TRIGGER
}

pub fn classify_archetype(scores: &PrimaryScores) -> &'static str {
    ARCHETYPES
        .iter()
        .find(|(factors, _, _)| factors.iter().all(|&f| triggers(scores, f)))
        .map(|(_, name, _)| *name)
        .unwrap_or(DEFAULT_ARCHETYPE)
}

/// Placement note for an archetype label.
pub fn archetype_placement(archetype: &str) -> Option<&'static str> {
    if archetype == DEFAULT_ARCHETYPE {
        return Some("Generalist roles across teams");
    }
    ARCHETYPES
        .iter()
        .find(|(_, name, _)| *name == archetype)
        .map(|(_, _, placement)| *placement)
}

pub fn work_styles(scores: &PrimaryScores) -> Vec<String> {
    let styles: Vec<String> = WORK_STYLES
        .iter()
        .filter(|&&(factor, _)| triggers(scores, factor))
        .map(|(_, style)| style.to_string())
        .collect();
    if styles.is_empty() {
        vec!["Balanced approach".to_string()]
    } else {
        styles
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadershipPotential {
    High,
    Moderate,
    IndividualContributor,
}

impl LeadershipPotential {
    pub fn label(&self) -> &'static str {
        match self {
            LeadershipPotential::High => "High Leadership Potential",
            LeadershipPotential::Moderate => "Moderate Leadership Potential",
            LeadershipPotential::IndividualContributor => "Individual Contributor Strength",
        }
    }
}

pub fn leadership_potential(scores: &PrimaryScores) -> LeadershipPotential {
    let total: f64 = LEADERSHIP_FACTORS.iter().map(|&f| scores.standardized(f)).sum();
    let average = total / LEADERSHIP_FACTORS.len() as f64;
    if average >= 7.0 {
        LeadershipPotential::High
    } else if average >= 5.0 {
        LeadershipPotential::Moderate
    } else {
        LeadershipPotential::IndividualContributor
    }
}
