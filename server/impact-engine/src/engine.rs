//! Core engine: runs the scoring pipeline for one stats record.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::adjust;
use crate::config::Config;
use crate::confidence;
use crate::error::EngineError;
use crate::score;
use crate::types::{ImpactResult, StatsInput};

/// The impact scoring engine. Stateless apart from its config; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Result<Self, EngineError> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn with_defaults() -> Self {
    Self {
      config: Config::default(),
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Score `stats`, stamping the current time.
  pub fn compute(&self, stats: &StatsInput) -> ImpactResult {
    self.compute_at(stats, Utc::now())
  }

  /// Score `stats` with an explicit `computedAt`. Same input and instant give identical output.
  pub fn compute_at(&self, stats: &StatsInput, now: DateTime<Utc>) -> ImpactResult {
    let breakdown = score::compute_breakdown(stats, &self.config);
    let base_score = score::compute_base_score(&breakdown, &self.config);
    let assessment = confidence::evaluate_confidence(stats, self.config.confidence_floor);

    let adjusted_score = adjust::compute_adjusted_score(base_score, assessment.confidence);
    let tier = adjust::classify_tier(adjusted_score);

    tracing::debug!(
      handle = %stats.handle,
      base_score,
      confidence = assessment.confidence,
      adjusted_score,
      %tier,
      penalties = assessment.penalties.len(),
      "computed impact"
    );

    ImpactResult {
      handle: stats.handle.clone(),
      base_score,
      confidence: assessment.confidence,
      confidence_penalties: assessment.penalties,
      adjusted_score,
      tier,
      breakdown,
      computed_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
  }
}

impl Default for Engine {
  fn default() -> Self {
    Self::with_defaults()
  }
}

/// Score `stats` with the default weights, stamped now.
pub fn compute_impact(stats: &StatsInput) -> ImpactResult {
  Engine::with_defaults().compute(stats)
}

/// Score `stats` with the default weights and an explicit timestamp.
pub fn compute_impact_at(stats: &StatsInput, now: DateTime<Utc>) -> ImpactResult {
  Engine::with_defaults().compute_at(stats, now)
}
