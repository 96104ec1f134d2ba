//! Confidence-adjusted score and tier mapping.

use crate::types::Tier;

/// Scale the base score by confidence. Confidence only dampens: at the 50 floor the
/// multiplier is 0.925, at 100 it is exactly 1.0.
pub fn compute_adjusted_score(base_score: u8, confidence: u8) -> u8 {
  let factor = 0.85 + 0.15 * (f64::from(confidence) / 100.0);
  (f64::from(base_score) * factor).clamp(0.0, 100.0).round() as u8
}

/// Lower-bound-inclusive thresholds: <40 Emerging, <70 Solid, <85 High, else Elite.
pub fn classify_tier(adjusted_score: u8) -> Tier {
  match adjusted_score {
    0..=39 => Tier::Emerging,
    40..=69 => Tier::Solid,
    70..=84 => Tier::High,
    _ => Tier::Elite,
  }
}
