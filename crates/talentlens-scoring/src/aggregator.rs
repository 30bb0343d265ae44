//! Response aggregation: group answer values by the category of the question
//! they answer.
//!
//! Each scorer supplies its own closed key set through a `resolve` function.
//! Labels that do not resolve are quarantined under their raw label instead
//! of being folded into a group, and answers whose question id is unknown are
//! dropped and counted.

use std::collections::{BTreeMap, HashMap};

use talentlens_common::model::{Answer, Question, ResponseSet, TestDefinition};
use tracing::{debug, warn};

/// Values grouped by resolved category key.
#[derive(Debug, Clone)]
pub struct Aggregation<K: Ord> {
    pub groups: BTreeMap<K, Vec<f64>>,
    /// Values whose category label matched no key, by raw label.
    pub quarantined: BTreeMap<String, Vec<f64>>,
    /// Answers that referenced no question in the definition.
    pub unmatched: usize,
}

impl<K: Ord> Default for Aggregation<K> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
            quarantined: BTreeMap::new(),
            unmatched: 0,
        }
    }
}

impl<K: Ord> Aggregation<K> {
    pub fn values(&self, key: &K) -> Option<&[f64]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Every valued answer, grouped or quarantined.
    pub fn all_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.groups
            .values()
            .chain(self.quarantined.values())
            .flat_map(|v| v.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.quarantined.is_empty()
    }
}

/// Numeric coercion: the answer as a number, 0 when it is not one.
pub fn numeric_value(_question: &Question, answer: &Answer) -> Option<f64> {
    Some(answer.answer.as_number())
}

/// Correctness grading: 1.0 when the answer matches the key, 0.0 otherwise.
/// Questions without a key are not graded.
pub fn graded_value(question: &Question, answer: &Answer) -> Option<f64> {
    question
        .correct_answer
        .as_deref()
        .map(|key| if answer.answer.matches(key) { 1.0 } else { 0.0 })
}

/// Lowercase, trim, and turn spaces and hyphens into underscores so that
/// "Working Memory", "working-memory" and "working_memory" compare equal.
pub fn normalise_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Group the values of `responses` by the category of each answered question.
///
/// `resolve` maps a question's category label to a key; `valuate` turns an
/// answer into a value or skips it by returning `None`.
pub fn aggregate<K, R, V>(
    definition: &TestDefinition,
    responses: &ResponseSet,
    resolve: R,
    valuate: V,
) -> Aggregation<K>
where
    K: Ord,
    R: Fn(&str) -> Option<K>,
    V: Fn(&Question, &Answer) -> Option<f64>,
{
    let by_id: HashMap<&str, &Question> = definition
        .questions
        .iter()
        .map(|q| (q.id.as_str(), q))
        .collect();

    let mut agg = Aggregation::default();

    for answer in &responses.answers {
        let Some(question) = by_id.get(answer.question_id.as_str()) else {
            agg.unmatched += 1;
            continue;
        };
        let Some(value) = valuate(question, answer) else {
            continue;
        };
        match resolve(&question.category) {
            Some(key) => agg.groups.entry(key).or_insert_with(Vec::new).push(value),
            None => agg
                .quarantined
                .entry(question.category.clone())
                .or_insert_with(Vec::new)
                .push(value),
        }
    }

    if agg.unmatched > 0 {
        debug!(
            test = %definition.id,
            unmatched = agg.unmatched,
            "Dropped answers with no matching question"
        );
    }
    if !agg.quarantined.is_empty() {
        warn!(
            test = %definition.id,
            kind = %definition.kind,
            labels = ?agg.quarantined.keys().collect::<Vec<_>>(),
            "Quarantined answers with unrecognised category labels"
        );
    }

    agg
}

/// Group by raw category label, accepting every label.
pub fn aggregate_by_label<V>(
    definition: &TestDefinition,
    responses: &ResponseSet,
    valuate: V,
) -> Aggregation<String>
where
    V: Fn(&Question, &Answer) -> Option<f64>,
{
    aggregate(definition, responses, |label| Some(label.to_string()), valuate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentlens_common::model::{ResponseType, TestKind};

    fn question(id: &str, category: &str, key: Option<&str>) -> Question {
        Question {
            id: id.to_string(),
            text: String::new(),
            response_type: ResponseType::Likert,
            category: category.to_string(),
            correct_answer: key.map(str::to_string),
            position: 0,
        }
    }

    fn definition(questions: Vec<Question>) -> TestDefinition {
        TestDefinition {
            id: "t".to_string(),
            name: String::new(),
            kind: TestKind::Personality,
            time_limit_minutes: None,
            question_count: questions.len(),
            questions,
        }
    }

    fn responses(answers: &[(&str, &str)]) -> ResponseSet {
        ResponseSet {
            answers: answers.iter().map(|(q, a)| Answer::new(*q, *a)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_by_question_category_and_drops_unknown_ids() {
        let def = definition(vec![question("q1", "a", None), question("q2", "a", None), question("q3", "b", None)]);
        let resp = responses(&[("q1", "4"), ("q2", "5"), ("q3", "x"), ("missing", "3")]);

        let agg = aggregate_by_label(&def, &resp, numeric_value);
        assert_eq!(agg.values(&"a".to_string()), Some(&[4.0, 5.0][..]));
        assert_eq!(agg.values(&"b".to_string()), Some(&[0.0][..]));
        assert_eq!(agg.unmatched, 1);
    }

    #[test]
    fn test_unresolved_labels_are_quarantined() {
        let def = definition(vec![question("q1", "known", None), question("q2", "mystery", None)]);
        let resp = responses(&[("q1", "2"), ("q2", "3")]);

        let agg = aggregate(&def, &resp, |l| (l == "known").then_some(1u8), numeric_value);
        assert_eq!(agg.values(&1), Some(&[2.0][..]));
        assert_eq!(agg.quarantined.get("mystery"), Some(&vec![3.0]));
        assert_eq!(agg.all_values().count(), 2);
    }

    #[test]
    fn test_graded_value_skips_unkeyed_questions() {
        let def = definition(vec![question("q1", "n", Some("B")), question("q2", "n", None)]);
        let resp = responses(&[("q1", "b"), ("q2", "anything")]);

        let agg = aggregate_by_label(&def, &resp, graded_value);
        assert_eq!(agg.values(&"n".to_string()), Some(&[1.0][..]));
    }

    #[test]
    fn test_normalise_label() {
        assert_eq!(normalise_label(" Working Memory "), "working_memory");
        assert_eq!(normalise_label("working-memory"), "working_memory");
    }
}
