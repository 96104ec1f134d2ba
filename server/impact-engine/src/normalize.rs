//! Signal normalization curves: log-scaled with a cap, and plain linear ratios.

/// Log-scaled 0..1 credit for a raw count, saturating at `cap`.
///
/// Returns 0 for `x <= 0`, exactly 1.0 once `x >= cap`, and
/// `ln(1 + x) / ln(1 + cap)` in between (diminishing returns).
pub fn normalize(x: f64, cap: f64) -> f64 {
  if x <= 0.0 {
    return 0.0;
  }
  (1.0 + x.min(cap)).ln() / (1.0 + cap).ln()
}

/// Linear 0..1 progress toward `cap`.
pub fn linear(x: f64, cap: f64) -> f64 {
  if x <= 0.0 {
    return 0.0;
  }
  x.min(cap) / cap
}
