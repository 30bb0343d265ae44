//! talentlens-test-utils — Fixture builders and seeded response generators
//! shared by the TalentLens test suites.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use talentlens_common::model::{
    Answer, Candidate, Question, ResponseSet, ResponseType, ScoringRequest, TestDefinition, TestKind,
};

pub use pretty_assertions;

/// Builder for test definitions.
pub struct DefinitionBuilder {
    definition: TestDefinition,
}

impl DefinitionBuilder {
    pub fn new(kind: TestKind) -> Self {
        Self {
            definition: TestDefinition {
                id: format!("{kind}-test"),
                name: format!("Sample {kind} assessment"),
                kind,
                time_limit_minutes: Some(60),
                question_count: 0,
                questions: Vec::new(),
            },
        }
    }

    /// Add an unkeyed likert question.
    pub fn question(mut self, id: &str, category: &str) -> Self {
        self.push(id, category, ResponseType::Likert, None);
        self
    }

    /// Add a multiple-choice question with an answer key.
    pub fn keyed(mut self, id: &str, category: &str, key: &str) -> Self {
        self.push(id, category, ResponseType::MultipleChoice, Some(key));
        self
    }

    /// Add `count` unkeyed questions in one category, ids `{prefix}1..`.
    pub fn questions(mut self, prefix: &str, category: &str, count: usize) -> Self {
        for i in 1..=count {
            self.push(&format!("{prefix}{i}"), category, ResponseType::Likert, None);
        }
        self
    }

    fn push(&mut self, id: &str, category: &str, response_type: ResponseType, key: Option<&str>) {
        let position = self.definition.questions.len() as u32 + 1;
        self.definition.questions.push(Question {
            id: id.to_string(),
            text: format!("Question {position}"),
            response_type,
            category: category.to_string(),
            correct_answer: key.map(str::to_string),
            position,
        });
    }

    pub fn build(mut self) -> TestDefinition {
        self.definition.question_count = self.definition.questions.len();
        self.definition
    }
}

/// Builder for response sets. Defaults to a comfortable 15-minute completion.
pub struct ResponsesBuilder {
    responses: ResponseSet,
}

impl Default for ResponsesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponsesBuilder {
    pub fn new() -> Self {
        Self {
            responses: ResponseSet {
                candidate: Candidate {
                    name: "Test Candidate".to_string(),
                    email: "candidate@example.com".to_string(),
                },
                answers: Vec::new(),
                started_at: None,
                submitted_at: None,
                time_spent_seconds: 900,
            },
        }
    }

    pub fn answer(mut self, question_id: &str, value: &str) -> Self {
        self.responses.answers.push(Answer::new(question_id, value));
        self
    }

    /// Answer every question of `definition` in order with `value`.
    pub fn answer_all(mut self, definition: &TestDefinition, value: &str) -> Self {
        for q in &definition.questions {
            self.responses.answers.push(Answer::new(q.id.as_str(), value));
        }
        self
    }

    pub fn seconds(mut self, seconds: u64) -> Self {
        self.responses.time_spent_seconds = seconds;
        self
    }

    /// Record timestamps instead of an elapsed count.
    pub fn timestamps(mut self, started_at: DateTime<Utc>, seconds: i64) -> Self {
        self.responses.time_spent_seconds = 0;
        self.responses.started_at = Some(started_at);
        self.responses.submitted_at = Some(started_at + Duration::seconds(seconds));
        self
    }

    pub fn build(self) -> ResponseSet {
        self.responses
    }
}

pub fn request(definition: TestDefinition, responses: ResponseSet) -> ScoringRequest {
    ScoringRequest {
        test_definition: definition,
        response_set: responses,
    }
}

/// A definition covering all sixteen personality factors, `per_factor`
/// questions each, using the full factor labels as categories.
pub fn full_personality_definition(per_factor: usize) -> TestDefinition {
    const LABELS: [&str; 16] = [
        "Warmth (A)",
        "Reasoning (B)",
        "Emotional Stability (C)",
        "Dominance (E)",
        "Liveliness (F)",
        "Rule-Consciousness (G)",
        "Social Boldness (H)",
        "Sensitivity (I)",
        "Vigilance (L)",
        "Abstractedness (M)",
        "Privateness (N)",
        "Apprehension (O)",
        "Openness to Change (Q1)",
        "Self-Reliance (Q2)",
        "Perfectionism (Q3)",
        "Tension (Q4)",
    ];
    LABELS
        .iter()
        .enumerate()
        .fold(DefinitionBuilder::new(TestKind::Personality), |b, (i, label)| {
            b.questions(&format!("f{i}-"), label, per_factor)
        })
        .build()
}

/// Seeded generator of arbitrary response sets, for invariant sweeps.
pub struct ResponseGenerator {
    rng: StdRng,
}

impl ResponseGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// A response set for `definition` with random values, some non-numeric
    /// answers, some unknown question ids, some skipped questions, and a
    /// completion time anywhere from 0 to 3 hours.
    pub fn responses_for(&mut self, definition: &TestDefinition) -> ResponseSet {
        let mut answers = Vec::new();
        for q in &definition.questions {
            if self.rng.gen_bool(0.1) {
                continue;
            }
            let value = match self.rng.gen_range(0..10) {
                0 => "n/a".to_string(),
                1 => q.correct_answer.clone().unwrap_or_else(|| "3".to_string()),
                _ => self.rng.gen_range(0..=6).to_string(),
            };
            answers.push(Answer::new(q.id.as_str(), value));
        }
        if self.rng.gen_bool(0.2) {
            answers.push(Answer::new("ghost", "4"));
        }
        ResponseSet {
            candidate: Candidate::default(),
            answers,
            started_at: None,
            submitted_at: None,
            time_spent_seconds: self.rng.gen_range(0..10_800),
        }
    }

    /// A definition of `kind` with `n` questions spread across `categories`,
    /// keyed with probability `keyed`.
    pub fn definition(&mut self, kind: TestKind, categories: &[&str], n: usize, keyed: f64) -> TestDefinition {
        let mut builder = DefinitionBuilder::new(kind);
        for i in 0..n {
            let category = categories[i % categories.len()];
            let id = format!("q{i}");
            builder = if self.rng.gen_bool(keyed) {
                let key = self.rng.gen_range(0..=6).to_string();
                builder.keyed(&id, category, &key)
            } else {
                builder.question(&id, category)
            };
        }
        builder.build()
    }
}
