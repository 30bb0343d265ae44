//! Input data model: test definitions and completed response sets.
//!
//! These mirror what the authoring store and the attempt-submission flow hand
//! to the engine. Field names serialize as camelCase to match the JSON
//! contract used by those collaborators.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TalentLensError};

// ── Test Definition ───────────────────────────────────────────────────────────

/// Kind of assessment. Selects the domain scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    Personality,
    Cognitive,
    Communication,
    Technical,
    Culture,
    /// Any kind string the engine has no scorer for.
    #[serde(other)]
    Unsupported,
}

impl TestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestKind::Personality => "personality",
            TestKind::Cognitive => "cognitive",
            TestKind::Communication => "communication",
            TestKind::Technical => "technical",
            TestKind::Culture => "culture",
            TestKind::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the response a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Scale,
    MultipleChoice,
    YesNo,
    #[default]
    Likert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub response_type: ResponseType,

    /// Category or factor label, e.g. "Warmth (A)" or "numerical".
    pub category: String,

    /// Answer key; only meaningful for correctness-graded kinds.
    #[serde(default)]
    pub correct_answer: Option<String>,

    #[serde(default)]
    pub position: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDefinition {
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub kind: TestKind,

    #[serde(default)]
    pub time_limit_minutes: Option<u32>,

    /// Declared question count. Informational; `questions` is authoritative.
    #[serde(default)]
    pub question_count: usize,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl TestDefinition {
    /// Reject structurally broken definitions before they reach the engine.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(TalentLensError::InvalidDefinition(
                "test definition id is empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if question.id.trim().is_empty() {
                return Err(TalentLensError::InvalidDefinition(format!(
                    "question at position {} has an empty id",
                    question.position
                )));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(TalentLensError::InvalidDefinition(format!(
                    "duplicate question id '{}'",
                    question.id
                )));
            }
        }

        if self.question_count != 0 && self.question_count != self.questions.len() {
            tracing::warn!(
                test = %self.id,
                declared = self.question_count,
                actual = self.questions.len(),
                "Declared question count does not match question list"
            );
        }

        Ok(())
    }
}

// ── Response Set ──────────────────────────────────────────────────────────────

/// Raw answer value as submitted.
///
/// Accepts JSON strings, numbers, and booleans; everything is kept as text so
/// that correctness grading and pattern checks see exactly what was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAnswerValue", into = "String")]
pub struct AnswerValue(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswerValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl From<RawAnswerValue> for AnswerValue {
    fn from(raw: RawAnswerValue) -> Self {
        match raw {
            RawAnswerValue::Text(s) => AnswerValue(s),
            RawAnswerValue::Number(n) => AnswerValue(n.to_string()),
            RawAnswerValue::Flag(b) => AnswerValue(b.to_string()),
        }
    }
}

impl From<AnswerValue> for String {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

impl AnswerValue {
    pub fn new(value: impl Into<String>) -> Self {
        AnswerValue(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric coercion for aggregation. Anything non-numeric is 0.
    pub fn as_number(&self) -> f64 {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Compare against an answer key, ignoring surrounding whitespace and case.
    pub fn matches(&self, key: &str) -> bool {
        self.0.trim().eq_ignore_ascii_case(key.trim())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,

    pub answer: AnswerValue,

    /// Category copied from the question at submission time. The engine
    /// re-resolves categories from the definition and does not trust this.
    #[serde(default)]
    pub category: Option<String>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: AnswerValue::new(answer),
            category: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSet {
    #[serde(default)]
    pub candidate: Candidate,

    #[serde(default)]
    pub answers: Vec<Answer>,

    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub time_spent_seconds: u64,
}

impl ResponseSet {
    /// Completion time in seconds.
    ///
    /// Uses the recorded elapsed time; when that is zero and both timestamps
    /// are present, falls back to their difference.
    pub fn completion_seconds(&self) -> u64 {
        if self.time_spent_seconds > 0 {
            return self.time_spent_seconds;
        }
        match (self.started_at, self.submitted_at) {
            (Some(start), Some(end)) if end > start => {
                (end - start).num_seconds().max(0) as u64
            }
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Reject structurally broken response sets before they reach the engine.
    pub fn validate(&self) -> Result<()> {
        if let Some(idx) = self.answers.iter().position(|a| a.question_id.trim().is_empty()) {
            return Err(TalentLensError::InvalidResponseSet(format!(
                "answer #{idx} has an empty question id"
            )));
        }
        if let (Some(start), Some(end)) = (self.started_at, self.submitted_at) {
            if end < start {
                return Err(TalentLensError::InvalidResponseSet(format!(
                    "submitted at {end} before it was started at {start}"
                )));
            }
        }
        Ok(())
    }
}

// ── Scoring Request ───────────────────────────────────────────────────────────

/// A definition and the responses to score against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRequest {
    pub test_definition: TestDefinition,
    pub response_set: ResponseSet,
}

impl ScoringRequest {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(content)?;
        request.validate()?;
        Ok(request)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let request: Self = serde_yaml::from_str(content)?;
        request.validate()?;
        Ok(request)
    }

    /// Parse by file extension; `.yaml`/`.yml` are YAML, everything else JSON.
    pub fn from_str_with_path(content: &str, path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(content),
            _ => Self::from_json_str(content),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.test_definition.validate()?;
        self.response_set.validate()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
