//! Core types for the impact engine (JSON contracts with the stats provider and badge consumers).

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract - what the stats provider sends)
// ---------------------------------------------------------------------------

/// 90-day activity window for one developer. Unknown fields are silently ignored;
/// missing counts default to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsInput {
  pub handle: String,
  #[serde(default)]
  pub commits_total: f64,
  #[serde(default)]
  pub active_days: f64,
  #[serde(default)]
  pub prs_merged_count: f64,
  /// Size/impact-weighted PR count.
  #[serde(default)]
  pub prs_merged_weight: f64,
  #[serde(default)]
  pub reviews_submitted_count: f64,
  #[serde(default)]
  pub issues_closed_count: f64,
  #[serde(default)]
  pub lines_added: f64,
  #[serde(default)]
  pub lines_deleted: f64,
  #[serde(default)]
  pub repos_contributed: f64,
  /// Share of commits landing in the busiest repo, 0..1.
  #[serde(default)]
  pub top_repo_share: f64,
  #[serde(default, rename = "maxCommitsIn10Min")]
  pub max_commits_in_10_min: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub micro_commit_ratio: Option<f64>,
  /// Set when stats were merged in from a linked account we cannot verify.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub has_supplemental_data: Option<bool>,
}

impl StatsInput {
  /// All-zero record for `handle` (a brand-new account).
  pub fn empty(handle: impl Into<String>) -> Self {
    Self {
      handle: handle.into(),
      ..Self::default()
    }
  }
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
  Emerging,
  Solid,
  High,
  Elite,
}

impl Tier {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Emerging => "Emerging",
      Self::Solid => "Solid",
      Self::High => "High",
      Self::Elite => "Elite",
    }
  }
}

impl fmt::Display for Tier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Confidence flags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceFlag {
  BurstActivity,
  MicroCommitPattern,
  GeneratedChangePattern,
  LowCollaborationSignal,
  SingleRepoConcentration,
  SupplementalUnverified,
}

impl ConfidenceFlag {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::BurstActivity => "burst_activity",
      Self::MicroCommitPattern => "micro_commit_pattern",
      Self::GeneratedChangePattern => "generated_change_pattern",
      Self::LowCollaborationSignal => "low_collaboration_signal",
      Self::SingleRepoConcentration => "single_repo_concentration",
      Self::SupplementalUnverified => "supplemental_unverified",
    }
  }
}

impl fmt::Display for ConfidenceFlag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One deduction applied by a fired rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidencePenalty {
  pub flag: ConfidenceFlag,
  pub penalty: u8,
  pub reason: String,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract - what we emit)
// ---------------------------------------------------------------------------

/// Normalized 0..1 value of each weighted signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
  pub commits: f64,
  pub pr_weight: f64,
  pub reviews: f64,
  pub issues: f64,
  pub streak: f64,
  pub collaboration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResult {
  pub handle: String,
  pub base_score: u8,
  pub confidence: u8,
  pub confidence_penalties: Vec<ConfidencePenalty>,
  pub adjusted_score: u8,
  pub tier: Tier,
  pub breakdown: Breakdown,
  /// ISO-8601 UTC, millisecond precision.
  pub computed_at: String,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
