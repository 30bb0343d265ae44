//! Engine facade: `AssessmentReport = f(TestDefinition, ResponseSet)`.

use talentlens_common::model::{ResponseSet, ScoringRequest, TestDefinition};
use talentlens_common::{AssessmentReport, EngineConfig};
use tracing::{debug, info};

use crate::aggregator::{aggregate_by_label, graded_value, numeric_value};
use crate::domain::{scorer_for, ScoringContext};
use crate::normalise::{clamp_score, mean, ratio_percent, scale_to_percent};
use crate::reliability::audit;
use crate::synthesis::{synthesize, SynthesisInput};

/// Stateless scoring engine. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    config: EngineConfig,
}

impl AssessmentEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one completed response set against its test definition.
    ///
    /// Never fails: sparse or malformed answers degrade into flags and
    /// default scores inside the report.
    pub fn score(&self, definition: &TestDefinition, responses: &ResponseSet) -> AssessmentReport {
        let ctx = ScoringContext {
            definition,
            responses,
            config: &self.config,
        };

        let domain = scorer_for(definition.kind).map(|scorer| scorer.score(&ctx));
        let overall_score = match &domain {
            Some(outcome) => outcome.overall_score,
            None => {
                debug!(test = %definition.id, kind = %definition.kind, "No scorer for test kind");
                fallback_overall(&ctx)
            }
        };

        let reliability = audit(responses, &self.config.reliability);
        let completion_seconds = responses.completion_seconds();

        let report = synthesize(
            SynthesisInput {
                overall_score,
                reliability,
                completion_seconds,
                domain,
            },
            &self.config,
        );

        info!(
            test = %definition.id,
            kind = %definition.kind,
            answers = responses.answers.len(),
            overall = report.overall_score,
            reliability = %report.reliability,
            verification = report.verification_score,
            "Assessment scored"
        );

        report
    }

    pub fn score_request(&self, request: &ScoringRequest) -> AssessmentReport {
        self.score(&request.test_definition, &request.response_set)
    }

    pub fn score_batch(&self, requests: &[ScoringRequest]) -> Vec<AssessmentReport> {
        requests.iter().map(|r| self.score_request(r)).collect()
    }
}

/// Overall score for kinds without a scorer: percent correct when any
/// question is keyed, otherwise the mean answer as a percentage of the scale.
fn fallback_overall(ctx: &ScoringContext<'_>) -> u32 {
    let max = ctx.config.scale.max_value;
    let graded = aggregate_by_label(ctx.definition, ctx.responses, graded_value);
    let graded: Vec<f64> = graded.all_values().collect();
    if !graded.is_empty() {
        return ratio_percent(graded.iter().sum(), graded.len() as f64).unwrap_or(0);
    }

    let numeric = aggregate_by_label(ctx.definition, ctx.responses, numeric_value);
    let percents: Vec<f64> = numeric.all_values().map(|v| scale_to_percent(v, max)).collect();
    mean(&percents).map(clamp_score).unwrap_or(0)
}

/// Score with the default configuration.
pub fn score_assessment(definition: &TestDefinition, responses: &ResponseSet) -> AssessmentReport {
    AssessmentEngine::default().score(definition, responses)
}
