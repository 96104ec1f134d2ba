//! Engine configuration with the calibrated defaults.

use crate::error::EngineError;

/// Saturation ceiling and blend weight for one signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
  pub cap: f64,
  pub weight: f64,
}

impl Signal {
  pub const fn new(cap: f64, weight: f64) -> Self {
    Self { cap, weight }
  }
}

/// Tunable weights and caps. Weights must sum to 1.0 to keep the base score in 0..=100.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  /// Log curve over `commitsTotal`.
  pub commits: Signal,
  /// Log curve over `prsMergedWeight`.
  pub pr_weight: Signal,
  /// Log curve over `reviewsSubmittedCount`.
  pub reviews: Signal,
  /// Log curve over `issuesClosedCount`.
  pub issues: Signal,
  /// Linear ratio over `activeDays`.
  pub streak: Signal,
  /// Linear ratio over `reposContributed`.
  pub collaboration: Signal,
  /// Lowest confidence any combination of penalties can produce.
  pub confidence_floor: u8,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      commits: Signal::new(200.0, 0.12),
      pr_weight: Signal::new(40.0, 0.33),
      reviews: Signal::new(60.0, 0.22),
      issues: Signal::new(30.0, 0.10),
      streak: Signal::new(90.0, 0.13),
      collaboration: Signal::new(10.0, 0.10),
      confidence_floor: 50,
    }
  }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// No configured floor may let confidence drop below half trust.
pub const MIN_CONFIDENCE_FLOOR: u8 = 50;

impl Config {
  fn signals(&self) -> [(&'static str, Signal); 6] {
    [
      ("commits", self.commits),
      ("pr_weight", self.pr_weight),
      ("reviews", self.reviews),
      ("issues", self.issues),
      ("streak", self.streak),
      ("collaboration", self.collaboration),
    ]
  }

  pub fn weight_sum(&self) -> f64 {
    self.signals().iter().map(|(_, s)| s.weight).sum()
  }

  /// Reject configs that could push scores outside their documented ranges.
  pub fn validate(&self) -> Result<(), EngineError> {
    for (name, signal) in self.signals() {
      if !signal.cap.is_finite() || signal.cap <= 0.0 {
        return Err(EngineError::config(format!(
          "{}: cap must be a positive finite number, got {}",
          name, signal.cap
        )));
      }
      if !signal.weight.is_finite() || signal.weight < 0.0 {
        return Err(EngineError::config(format!(
          "{}: weight must be non-negative, got {}",
          name, signal.weight
        )));
      }
    }
    let sum = self.weight_sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
      return Err(EngineError::config(format!(
        "signal weights must sum to 1.0, got {}",
        sum
      )));
    }
    if !(MIN_CONFIDENCE_FLOOR..=100).contains(&self.confidence_floor) {
      return Err(EngineError::config(format!(
        "confidence_floor must be in {}..=100, got {}",
        MIN_CONFIDENCE_FLOOR, self.confidence_floor
      )));
    }
    Ok(())
  }
}
