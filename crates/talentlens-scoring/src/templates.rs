//! Fixed-template sub-scoring shared by the communication, technical, and
//! culture scorers.
//!
//! A template is a table of five named dimensions, each with the category
//! aliases that feed it. Every answer becomes a percentage: 100/0 for keyed
//! questions, otherwise its value on the configured scale. A dimension's
//! score is the mean percentage of its answers, or 50 when it has none.

use talentlens_common::model::{Answer, Question};

use crate::aggregator::{aggregate, normalise_label, Aggregation};
use crate::domain::ScoringContext;
use crate::normalise::{clamp_score, mean, scale_to_percent};

pub const DEFAULT_SUBSCORE: u32 = 50;
pub const WEAK_THRESHOLD: u32 = 60;
pub const STRONG_THRESHOLD: u32 = 75;

pub struct Dimension {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

/// Summary labels for mean scores ≥80, ≥65, ≥50, and below.
pub type Bands = [&'static str; 4];

#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub name: &'static str,
    pub score: u32,
    /// Number of answers behind the score; 0 means it is the default.
    pub answered: usize,
}

impl SubScore {
    pub fn is_weak(&self) -> bool {
        self.answered > 0 && self.score < WEAK_THRESHOLD
    }

    pub fn is_strong(&self) -> bool {
        self.answered > 0 && self.score >= STRONG_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateScores {
    /// In table order.
    pub subscores: Vec<SubScore>,
    pub band: &'static str,
    /// Mean of answered dimensions, 0 when none were answered.
    pub overall: u32,
}

impl TemplateScores {
    pub fn score(&self, idx: usize) -> u32 {
        self.subscores.get(idx).map(|s| s.score).unwrap_or(DEFAULT_SUBSCORE)
    }

    pub fn weak(&self) -> impl Iterator<Item = &SubScore> {
        self.subscores.iter().filter(|s| s.is_weak())
    }

    pub fn strong(&self) -> impl Iterator<Item = &SubScore> {
        self.subscores.iter().filter(|s| s.is_strong())
    }

    /// Highest answered dimension; earlier dimensions win ties.
    pub fn strongest(&self) -> Option<&SubScore> {
        self.subscores
            .iter()
            .filter(|s| s.answered > 0)
            .fold(None, |best: Option<&SubScore>, s| match best {
                Some(b) if b.score >= s.score => Some(b),
                _ => Some(s),
            })
    }
}

pub fn band_for(mean_score: f64, bands: &Bands) -> &'static str {
    if mean_score >= 80.0 {
        bands[0]
    } else if mean_score >= 65.0 {
        bands[1]
    } else if mean_score >= 50.0 {
        bands[2]
    } else {
        bands[3]
    }
}

fn resolve(dimensions: &'static [Dimension], label: &str) -> Option<usize> {
    let wanted = normalise_label(label);
    dimensions
        .iter()
        .position(|d| d.aliases.contains(&wanted.as_str()))
}

fn percent_value(max: f64) -> impl Fn(&Question, &Answer) -> Option<f64> {
    move |question, answer| {
        Some(match question.correct_answer.as_deref() {
            Some(key) if answer.answer.matches(key) => 100.0,
            Some(_) => 0.0,
            None => scale_to_percent(answer.answer.as_number(), max),
        })
    }
}

pub fn score_template(ctx: &ScoringContext<'_>, dimensions: &'static [Dimension], bands: &Bands) -> TemplateScores {
    let agg: Aggregation<usize> = aggregate(
        ctx.definition,
        ctx.responses,
        |label| resolve(dimensions, label),
        percent_value(ctx.config.scale.max_value),
    );

    let subscores: Vec<SubScore> = dimensions
        .iter()
        .enumerate()
        .map(|(idx, dim)| match agg.values(&idx) {
            Some(values) => SubScore {
                name: dim.name,
                score: mean(values).map(clamp_score).unwrap_or(DEFAULT_SUBSCORE),
                answered: values.len(),
            },
            None => SubScore { name: dim.name, score: DEFAULT_SUBSCORE, answered: 0 },
        })
        .collect();

    let all: Vec<f64> = subscores.iter().map(|s| s.score as f64).collect();
    let band = band_for(mean(&all).unwrap_or(0.0), bands);

    let answered: Vec<f64> = subscores
        .iter()
        .filter(|s| s.answered > 0)
        .map(|s| s.score as f64)
        .collect();
    let overall = mean(&answered).map(clamp_score).unwrap_or(0);

    TemplateScores { subscores, band, overall }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: Bands = ["A", "B", "C", "D"];

    #[test]
    fn test_band_edges() {
        assert_eq!(band_for(80.0, &BANDS), "A");
        assert_eq!(band_for(79.9, &BANDS), "B");
        assert_eq!(band_for(65.0, &BANDS), "B");
        assert_eq!(band_for(50.0, &BANDS), "C");
        assert_eq!(band_for(49.0, &BANDS), "D");
    }

    #[test]
    fn test_default_subscores_are_neither_weak_nor_strong() {
        let s = SubScore { name: "x", score: DEFAULT_SUBSCORE, answered: 0 };
        assert!(!s.is_weak() && !s.is_strong());
    }

    #[test]
    fn test_strongest_prefers_first_on_tie() {
        let scores = TemplateScores {
            subscores: vec![
                SubScore { name: "a", score: 70, answered: 1 },
                SubScore { name: "b", score: 90, answered: 1 },
                SubScore { name: "c", score: 90, answered: 2 },
                SubScore { name: "d", score: 99, answered: 0 },
            ],
            band: "A",
            overall: 83,
        };
        assert_eq!(scores.strongest().map(|s| s.name), Some("b"));
    }
}
