//! Impact Engine - deterministic developer impact scoring; no AI, no DB, no network.
//!
//! Takes a 90-day window of GitHub activity counts and produces a 0–100 base score,
//! a 50–100 confidence rating from anomaly rules, a confidence-adjusted score and a
//! tier. Used by the binary for stdin/stdout; can also be called as a library.

pub mod adjust;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod score;
pub mod stream;
pub mod types;
pub mod validate;

pub use config::Config;
pub use engine::{compute_impact, compute_impact_at, Engine};
pub use error::EngineError;
pub use stream::StreamSummary;
pub use types::{
  Breakdown, ConfidenceFlag, ConfidencePenalty, ErrorOutput, ImpactResult, StatsInput, Tier,
};
pub use validate::validate_stats;
