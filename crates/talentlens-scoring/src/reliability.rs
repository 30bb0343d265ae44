//! Reliability audit over completion time and answer repetition.
//!
//! Runs for every test kind. Checks are ordered and the first hit decides:
//! empty set, too fast, too slow, then pattern responding.

use talentlens_common::engine_config::ReliabilityConfig;
use talentlens_common::model::{Answer, ResponseSet};
use talentlens_common::ReliabilityVerdict;
use tracing::debug;

/// Length of the longest run of identical consecutive answers.
pub fn longest_identical_run(answers: &[Answer]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<&str> = None;

    for answer in answers {
        let value = answer.answer.as_str().trim();
        if previous == Some(value) {
            current += 1;
        } else {
            current = 1;
            previous = Some(value);
        }
        longest = longest.max(current);
    }

    longest
}

pub fn audit(responses: &ResponseSet, config: &ReliabilityConfig) -> ReliabilityVerdict {
    if responses.is_empty() {
        return ReliabilityVerdict::Invalid;
    }

    let seconds = responses.completion_seconds();
    if seconds < config.min_completion_seconds {
        return ReliabilityVerdict::TooFast;
    }
    if seconds > config.max_completion_seconds {
        return ReliabilityVerdict::TooSlow;
    }

    let run = longest_identical_run(&responses.answers);
    if run > config.max_identical_run {
        debug!(run, limit = config.max_identical_run, "Pattern responding detected");
        return ReliabilityVerdict::PatternResponding;
    }

    ReliabilityVerdict::Reliable
}
