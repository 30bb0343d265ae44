//! Static factor tables: the sixteen primary personality factors and the five
//! global composites derived from them.

use crate::aggregator::normalise_label;

/// The sixteen primary factors, in roster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrimaryFactor {
    Warmth,
    Reasoning,
    EmotionalStability,
    Dominance,
    Liveliness,
    RuleConsciousness,
    SocialBoldness,
    Sensitivity,
    Vigilance,
    Abstractedness,
    Privateness,
    Apprehension,
    OpennessToChange,
    SelfReliance,
    Perfectionism,
    Tension,
}

pub struct FactorDefinition {
    pub factor: PrimaryFactor,
    /// Display label, also the category label used by question authors.
    pub label: &'static str,
    /// Name without the factor code.
    pub name: &'static str,
    /// Factor code, e.g. "A" or "Q1".
    pub code: &'static str,
    /// Low pole vs. high pole.
    pub description: &'static str,
}

/// Indexed by `PrimaryFactor as usize`.
pub const PRIMARY_FACTORS: [FactorDefinition; 16] = [
    FactorDefinition { factor: PrimaryFactor::Warmth,             label: "Warmth (A)",              name: "Warmth",              code: "A",  description: "Reserved, impersonal vs. warm, attentive to others" },
    FactorDefinition { factor: PrimaryFactor::Reasoning,          label: "Reasoning (B)",           name: "Reasoning",           code: "B",  description: "Concrete thinking vs. abstract thinking" },
    FactorDefinition { factor: PrimaryFactor::EmotionalStability, label: "Emotional Stability (C)", name: "Emotional Stability", code: "C",  description: "Reactive, emotionally changeable vs. emotionally stable, adaptive" },
    FactorDefinition { factor: PrimaryFactor::Dominance,          label: "Dominance (E)",           name: "Dominance",           code: "E",  description: "Deferential, cooperative vs. dominant, assertive" },
    FactorDefinition { factor: PrimaryFactor::Liveliness,         label: "Liveliness (F)",          name: "Liveliness",          code: "F",  description: "Serious, restrained vs. lively, spontaneous" },
    FactorDefinition { factor: PrimaryFactor::RuleConsciousness,  label: "Rule-Consciousness (G)",  name: "Rule-Consciousness",  code: "G",  description: "Expedient, nonconforming vs. rule-conscious, dutiful" },
    FactorDefinition { factor: PrimaryFactor::SocialBoldness,     label: "Social Boldness (H)",     name: "Social Boldness",     code: "H",  description: "Shy, threat-sensitive vs. socially bold, venturesome" },
    FactorDefinition { factor: PrimaryFactor::Sensitivity,        label: "Sensitivity (I)",         name: "Sensitivity",         code: "I",  description: "Utilitarian, objective vs. sensitive, aesthetic" },
    FactorDefinition { factor: PrimaryFactor::Vigilance,          label: "Vigilance (L)",           name: "Vigilance",           code: "L",  description: "Trusting, accepting vs. vigilant, suspicious" },
    FactorDefinition { factor: PrimaryFactor::Abstractedness,     label: "Abstractedness (M)",      name: "Abstractedness",      code: "M",  description: "Grounded, practical vs. abstracted, imaginative" },
    FactorDefinition { factor: PrimaryFactor::Privateness,        label: "Privateness (N)",         name: "Privateness",         code: "N",  description: "Forthright, genuine vs. private, discreet" },
    FactorDefinition { factor: PrimaryFactor::Apprehension,       label: "Apprehension (O)",        name: "Apprehension",        code: "O",  description: "Self-assured, unworried vs. apprehensive, self-doubting" },
    FactorDefinition { factor: PrimaryFactor::OpennessToChange,   label: "Openness to Change (Q1)", name: "Openness to Change",  code: "Q1", description: "Traditional, attached to the familiar vs. open to change, experimenting" },
    FactorDefinition { factor: PrimaryFactor::SelfReliance,       label: "Self-Reliance (Q2)",      name: "Self-Reliance",       code: "Q2", description: "Group-oriented, affiliative vs. self-reliant, individualistic" },
    FactorDefinition { factor: PrimaryFactor::Perfectionism,      label: "Perfectionism (Q3)",      name: "Perfectionism",       code: "Q3", description: "Tolerates disorder, flexible vs. perfectionistic, organized" },
    FactorDefinition { factor: PrimaryFactor::Tension,            label: "Tension (Q4)",            name: "Tension",             code: "Q4", description: "Relaxed, placid, patient vs. tense, high energy, driven" },
];

impl PrimaryFactor {
    pub fn definition(self) -> &'static FactorDefinition {
        &PRIMARY_FACTORS[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.definition().label
    }

    /// Resolve a question category label to a factor.
    ///
    /// Accepts the full label ("Warmth (A)"), the bare name ("warmth") or the
    /// code ("A"), ignoring case, surrounding whitespace, and space/hyphen
    /// differences.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalise_label(label);
        PRIMARY_FACTORS
            .iter()
            .find(|d| {
                normalise_label(d.label) == wanted
                    || normalise_label(d.name) == wanted
                    || normalise_label(d.code) == wanted
            })
            .map(|d| d.factor)
    }
}

// ── Global factor formulas ────────────────────────────────────────────────────

pub const EXTRAVERSION: &str = "Extraversion";
pub const ANXIETY: &str = "Anxiety";
pub const TOUGH_MINDEDNESS: &str = "Tough-Mindedness";
pub const INDEPENDENCE: &str = "Independence";
pub const SELF_CONTROL: &str = "Self-Control";

/// A second-order composite: `Σ(sign × primary) / divisor`.
pub struct GlobalFormula {
    pub name: &'static str,
    pub terms: &'static [(PrimaryFactor, f64)],
    pub divisor: f64,
    pub description: &'static str,
}

pub const GLOBAL_FORMULAS: [GlobalFormula; 5] = [
    GlobalFormula {
        name: EXTRAVERSION,
        terms: &[
            (PrimaryFactor::Warmth, 1.0),
            (PrimaryFactor::Liveliness, 1.0),
            (PrimaryFactor::SocialBoldness, 1.0),
            (PrimaryFactor::Privateness, -1.0),
        ],
        divisor: 4.0,
        description: "Orientation toward people and social stimulation",
    },
    GlobalFormula {
        name: ANXIETY,
        terms: &[
            (PrimaryFactor::Apprehension, 1.0),
            (PrimaryFactor::Tension, 1.0),
            (PrimaryFactor::EmotionalStability, -1.0),
        ],
        divisor: 3.0,
        description: "Tendency to experience worry, tension, and emotional reactivity",
    },
    GlobalFormula {
        name: TOUGH_MINDEDNESS,
        terms: &[
            (PrimaryFactor::Reasoning, 1.0),
            (PrimaryFactor::Sensitivity, -1.0),
            (PrimaryFactor::Vigilance, 1.0),
        ],
        divisor: 3.0,
        description: "Preference for objective, practical judgement over feelings",
    },
    GlobalFormula {
        name: INDEPENDENCE,
        terms: &[
            (PrimaryFactor::Dominance, 1.0),
            (PrimaryFactor::OpennessToChange, 1.0),
            (PrimaryFactor::SelfReliance, 1.0),
        ],
        divisor: 3.0,
        description: "Drive to think and act autonomously and shape one's environment",
    },
    GlobalFormula {
        name: SELF_CONTROL,
        terms: &[
            (PrimaryFactor::RuleConsciousness, 1.0),
            (PrimaryFactor::Perfectionism, 1.0),
            (PrimaryFactor::Abstractedness, -1.0),
        ],
        divisor: 3.0,
        description: "Capacity to restrain impulses and follow structure and standards",
    },
];
