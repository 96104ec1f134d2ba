//! Confidence: additive anomaly rules over raw stats, floored so no profile drops below half trust.
//!
//! Rules are independent and order-free. Overlapping symptoms stack (a large
//! low-review change set can trip both `generated_change_pattern` and
//! `low_collaboration_signal`); the floor absorbs the excess.

use std::fmt;

use crate::types::{ConfidenceFlag, ConfidencePenalty, StatsInput};

/// One anomaly heuristic.
pub struct Rule {
  pub flag: ConfidenceFlag,
  pub penalty: u8,
  pub reason: &'static str,
  pub applies: fn(&StatsInput) -> bool,
}

impl fmt::Debug for Rule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Rule")
      .field("flag", &self.flag)
      .field("penalty", &self.penalty)
      .field("reason", &self.reason)
      .finish_non_exhaustive()
  }
}

/// Penalty entries are emitted in this order.
pub const RULES: &[Rule] = &[
  Rule {
    flag: ConfidenceFlag::BurstActivity,
    penalty: 15,
    reason: "20 or more commits landed within a single 10-minute window",
    applies: |s| s.max_commits_in_10_min >= 20.0,
  },
  Rule {
    flag: ConfidenceFlag::MicroCommitPattern,
    penalty: 10,
    reason: "60% or more of commits are trivially small",
    applies: |s| s.micro_commit_ratio.is_some_and(|r| r >= 0.6),
  },
  Rule {
    flag: ConfidenceFlag::GeneratedChangePattern,
    penalty: 15,
    reason: "20k+ changed lines with almost no code review activity",
    applies: |s| s.lines_added + s.lines_deleted >= 20_000.0 && s.reviews_submitted_count <= 2.0,
  },
  Rule {
    flag: ConfidenceFlag::LowCollaborationSignal,
    penalty: 10,
    reason: "10+ merged PRs but at most one review given to others",
    applies: |s| s.prs_merged_count >= 10.0 && s.reviews_submitted_count <= 1.0,
  },
  Rule {
    flag: ConfidenceFlag::SingleRepoConcentration,
    penalty: 5,
    reason: "95%+ of activity in a single repository",
    applies: |s| s.top_repo_share >= 0.95 && s.repos_contributed <= 1.0,
  },
  Rule {
    flag: ConfidenceFlag::SupplementalUnverified,
    penalty: 5,
    reason: "includes stats merged from a linked account that cannot be verified",
    applies: |s| s.has_supplemental_data == Some(true),
  },
];

pub const MAX_CONFIDENCE: u8 = 100;

/// Confidence rating plus every penalty that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfidenceAssessment {
  pub confidence: u8,
  pub penalties: Vec<ConfidencePenalty>,
}

/// Penalties for every rule whose predicate holds.
pub fn collect_penalties(stats: &StatsInput, rules: &[Rule]) -> Vec<ConfidencePenalty> {
  rules
    .iter()
    .filter(|rule| (rule.applies)(stats))
    .map(|rule| {
      tracing::trace!(handle = %stats.handle, flag = %rule.flag, penalty = rule.penalty, "confidence rule fired");
      ConfidencePenalty {
        flag: rule.flag,
        penalty: rule.penalty,
        reason: rule.reason.to_string(),
      }
    })
    .collect()
}

/// `max(floor, 100 - sum(penalties))`.
pub fn confidence_from_penalties(penalties: &[ConfidencePenalty], floor: u8) -> u8 {
  let total: u32 = penalties.iter().map(|p| u32::from(p.penalty)).sum();
  let raw = u32::from(MAX_CONFIDENCE).saturating_sub(total);
  raw.max(u32::from(floor)).min(u32::from(MAX_CONFIDENCE)) as u8
}

/// Run the built-in rule table against raw stats.
pub fn evaluate_confidence(stats: &StatsInput, floor: u8) -> ConfidenceAssessment {
  let penalties = collect_penalties(stats, RULES);
  let confidence = confidence_from_penalties(&penalties, floor);
  ConfidenceAssessment {
    confidence,
    penalties,
  }
}
