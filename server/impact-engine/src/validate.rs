//! Boundary validation for stats records arriving over the wire.
//!
//! The scoring path trusts its input; the binary runs this first so NaN, infinities
//! and negative counts are rejected instead of being silently coerced.

use crate::error::EngineError;
use crate::types::StatsInput;

fn check_count(field: &str, value: f64) -> Result<(), EngineError> {
  if !value.is_finite() {
    return Err(EngineError::validation(field, "must be a finite number"));
  }
  if value < 0.0 {
    return Err(EngineError::validation(field, "must be >= 0"));
  }
  Ok(())
}

fn check_fraction(field: &str, value: f64) -> Result<(), EngineError> {
  check_count(field, value)?;
  if value > 1.0 {
    return Err(EngineError::validation(field, "must be a fraction in [0, 1]"));
  }
  Ok(())
}

/// Validate a stats record before scoring it.
pub fn validate_stats(stats: &StatsInput) -> Result<(), EngineError> {
  if stats.handle.trim().is_empty() {
    return Err(EngineError::validation("handle", "must not be empty"));
  }

  let counts = [
    ("commitsTotal", stats.commits_total),
    ("activeDays", stats.active_days),
    ("prsMergedCount", stats.prs_merged_count),
    ("prsMergedWeight", stats.prs_merged_weight),
    ("reviewsSubmittedCount", stats.reviews_submitted_count),
    ("issuesClosedCount", stats.issues_closed_count),
    ("linesAdded", stats.lines_added),
    ("linesDeleted", stats.lines_deleted),
    ("reposContributed", stats.repos_contributed),
    ("maxCommitsIn10Min", stats.max_commits_in_10_min),
  ];
  for (field, value) in counts {
    check_count(field, value)?;
  }

  check_fraction("topRepoShare", stats.top_repo_share)?;
  if let Some(ratio) = stats.micro_commit_ratio {
    check_fraction("microCommitRatio", ratio)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_account_is_valid() {
    assert!(validate_stats(&StatsInput::empty("newbie")).is_ok());
  }

  #[test]
  fn rejects_blank_handle() {
    let err = validate_stats(&StatsInput::empty("  ")).unwrap_err();
    assert!(err.to_string().contains("handle"));
  }

  #[test]
  fn rejects_negative_count() {
    let stats = StatsInput {
      lines_deleted: -4.0,
      ..StatsInput::empty("dev")
    };
    match validate_stats(&stats).unwrap_err() {
      EngineError::Validation { field, .. } => assert_eq!(field, "linesDeleted"),
      other => panic!("unexpected error: {}", other),
    }
  }

  #[test]
  fn rejects_nan_and_infinity() {
    let nan = StatsInput {
      commits_total: f64::NAN,
      ..StatsInput::empty("dev")
    };
    assert!(validate_stats(&nan).unwrap_err().to_string().contains("finite"));
    let inf = StatsInput {
      prs_merged_weight: f64::INFINITY,
      ..StatsInput::empty("dev")
    };
    assert!(validate_stats(&inf).is_err());
  }

  #[test]
  fn fractions_must_stay_in_unit_range() {
    let share = StatsInput {
      top_repo_share: 1.2,
      ..StatsInput::empty("dev")
    };
    assert!(validate_stats(&share).unwrap_err().to_string().contains("topRepoShare"));
    let ratio = StatsInput {
      micro_commit_ratio: Some(1.5),
      ..StatsInput::empty("dev")
    };
    assert!(validate_stats(&ratio).unwrap_err().to_string().contains("microCommitRatio"));
  }
}
