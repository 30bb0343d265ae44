//! Engine configuration: the thresholds and deductions the scoring pipeline
//! applies.
//!
//! Every field has a default, and the defaults are the production values. A
//! config file only needs to name what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TalentLensError};

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Timing and pattern checks
    #[serde(default)]
    pub reliability: ReliabilityConfig,

    /// Verification score deductions
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Hiring recommendation cut-offs
    #[serde(default)]
    pub recommendations: RecommendationConfig,

    /// Risk factor cut-offs
    #[serde(default)]
    pub risk: RiskConfig,

    /// Response scale used to convert answers into percentages
    #[serde(default)]
    pub scale: ScaleConfig,
}

// ── Reliability ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityConfig {
    /// Completion faster than this (seconds) is flagged
    #[serde(default = "default_min_seconds")]
    pub min_completion_seconds: u64,

    /// Completion slower than this (seconds) is flagged
    #[serde(default = "default_max_seconds")]
    pub max_completion_seconds: u64,

    /// A run of identical consecutive answers longer than this is flagged
    #[serde(default = "default_max_identical_run")]
    pub max_identical_run: usize,
}

fn default_min_seconds() -> u64 { 300 }
fn default_max_seconds() -> u64 { 7200 }
fn default_max_identical_run() -> usize { 10 }

impl Default for ReliabilityConfig {
    fn default() -> Self {
        Self {
            min_completion_seconds: default_min_seconds(),
            max_completion_seconds: default_max_seconds(),
            max_identical_run: default_max_identical_run(),
        }
    }
}

// ── Verification ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationConfig {
    #[serde(default = "default_unreliable_penalty")]
    pub unreliable_penalty: u32,

    #[serde(default = "default_too_fast_penalty")]
    pub too_fast_penalty: u32,

    #[serde(default = "default_too_slow_penalty")]
    pub too_slow_penalty: u32,

    #[serde(default = "default_low_score_penalty")]
    pub low_score_penalty: u32,

    /// Overall scores below this draw `low_score_penalty`
    #[serde(default = "default_low_score_cutoff")]
    pub low_score_cutoff: u32,
}

fn default_unreliable_penalty() -> u32 { 30 }
fn default_too_fast_penalty() -> u32 { 20 }
fn default_too_slow_penalty() -> u32 { 15 }
fn default_low_score_penalty() -> u32 { 25 }
fn default_low_score_cutoff() -> u32 { 20 }

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            unreliable_penalty: default_unreliable_penalty(),
            too_fast_penalty: default_too_fast_penalty(),
            too_slow_penalty: default_too_slow_penalty(),
            low_score_penalty: default_low_score_penalty(),
            low_score_cutoff: default_low_score_cutoff(),
        }
    }
}

// ── Recommendations ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_highly_recommended")]
    pub highly_recommended_threshold: u32,

    #[serde(default = "default_recommended")]
    pub recommended_threshold: u32,
}

fn default_highly_recommended() -> u32 { 75 }
fn default_recommended() -> u32 { 60 }

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            highly_recommended_threshold: default_highly_recommended(),
            recommended_threshold: default_recommended(),
        }
    }
}

// ── Risk ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Overall scores below this are a risk factor
    #[serde(default = "default_low_performance")]
    pub low_performance_threshold: u32,

    /// Anxiety composite above this is a risk factor
    #[serde(default = "default_anxiety")]
    pub anxiety_threshold: i64,
}

fn default_low_performance() -> u32 { 40 }
fn default_anxiety() -> i64 { 7 }

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            low_performance_threshold: default_low_performance(),
            anxiety_threshold: default_anxiety(),
        }
    }
}

// ── Scale ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Top of the likert/scale range answers are expressed on
    #[serde(default = "default_scale_max")]
    pub max_value: f64,
}

fn default_scale_max() -> f64 { 5.0 }

impl Default for ScaleConfig {
    fn default() -> Self {
        Self { max_value: default_scale_max() }
    }
}

// ── Helper Methods ─────────────────────────────────────────────────────────────

impl EngineConfig {
    /// Load from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load by extension: `.yaml`/`.yml` as YAML, anything else as TOML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Reject inconsistent thresholds
    pub fn validate(&self) -> Result<()> {
        if self.reliability.min_completion_seconds >= self.reliability.max_completion_seconds {
            return Err(TalentLensError::Config(format!(
                "reliability.min_completion_seconds ({}) must be below max_completion_seconds ({})",
                self.reliability.min_completion_seconds, self.reliability.max_completion_seconds
            )));
        }
        if self.recommendations.recommended_threshold > self.recommendations.highly_recommended_threshold {
            return Err(TalentLensError::Config(format!(
                "recommendations.recommended_threshold ({}) exceeds highly_recommended_threshold ({})",
                self.recommendations.recommended_threshold,
                self.recommendations.highly_recommended_threshold
            )));
        }
        if !(self.scale.max_value.is_finite() && self.scale.max_value > 0.0) {
            return Err(TalentLensError::Config(format!(
                "scale.max_value must be a positive number, got {}",
                self.scale.max_value
            )));
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
