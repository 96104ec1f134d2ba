//! Base score: weighted blend of six normalized activity signals.

use crate::config::Config;
use crate::normalize::{linear, normalize};
use crate::types::{Breakdown, StatsInput};

/// Normalized 0..1 value of each signal.
pub fn compute_breakdown(stats: &StatsInput, config: &Config) -> Breakdown {
  Breakdown {
    commits: normalize(stats.commits_total, config.commits.cap),
    pr_weight: normalize(stats.prs_merged_weight, config.pr_weight.cap),
    reviews: normalize(stats.reviews_submitted_count, config.reviews.cap),
    issues: normalize(stats.issues_closed_count, config.issues.cap),
    // Steady presence and spread reward proportional progress, not early bursts.
    streak: linear(stats.active_days, config.streak.cap),
    collaboration: linear(stats.repos_contributed, config.collaboration.cap),
  }
}

/// Weighted sum of the breakdown, 0..1.
pub fn weighted_sum(breakdown: &Breakdown, config: &Config) -> f64 {
  config.commits.weight * breakdown.commits
    + config.pr_weight.weight * breakdown.pr_weight
    + config.reviews.weight * breakdown.reviews
    + config.issues.weight * breakdown.issues
    + config.streak.weight * breakdown.streak
    + config.collaboration.weight * breakdown.collaboration
}

/// Base score 0–100: `round(100 * weighted_sum)`.
pub fn compute_base_score(breakdown: &Breakdown, config: &Config) -> u8 {
  (100.0 * weighted_sum(breakdown, config)).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
  use super::*;

  fn stats() -> StatsInput {
    StatsInput {
      commits_total: 50.0,
      prs_merged_weight: 10.0,
      reviews_submitted_count: 15.0,
      issues_closed_count: 5.0,
      active_days: 30.0,
      repos_contributed: 3.0,
      ..StatsInput::empty("dev")
    }
  }

  #[test]
  fn breakdown_matches_curves() {
    let b = compute_breakdown(&stats(), &Config::default());
    assert_eq!(b.commits, 51f64.ln() / 201f64.ln());
    assert_eq!(b.pr_weight, 11f64.ln() / 41f64.ln());
    assert_eq!(b.reviews, 16f64.ln() / 61f64.ln());
    assert_eq!(b.issues, 6f64.ln() / 31f64.ln());
    assert_eq!(b.streak, 30.0 / 90.0);
    assert_eq!(b.collaboration, 3.0 / 10.0);
  }

  #[test]
  fn active_days_beyond_window_saturate() {
    let s = StatsInput {
      active_days: 120.0,
      repos_contributed: 25.0,
      ..StatsInput::empty("dev")
    };
    let b = compute_breakdown(&s, &Config::default());
    assert_eq!(b.streak, 1.0);
    assert_eq!(b.collaboration, 1.0);
  }

  #[test]
  fn empty_stats_score_zero() {
    let config = Config::default();
    let b = compute_breakdown(&StatsInput::empty("new"), &config);
    assert_eq!(b, Breakdown::default());
    assert_eq!(compute_base_score(&b, &config), 0);
  }

  #[test]
  fn pr_weight_dominates_commits() {
    let config = Config::default();
    let prs = StatsInput {
      prs_merged_weight: 40.0,
      ..StatsInput::empty("a")
    };
    let commits = StatsInput {
      commits_total: 200.0,
      ..StatsInput::empty("b")
    };
    let pr_score = compute_base_score(&compute_breakdown(&prs, &config), &config);
    let commit_score = compute_base_score(&compute_breakdown(&commits, &config), &config);
    assert_eq!(pr_score, 33);
    assert_eq!(commit_score, 12);
  }
}
