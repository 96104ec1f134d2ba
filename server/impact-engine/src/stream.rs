//! JSON-lines driver: one StatsInput per input line, one ImpactResult or ErrorOutput per output line.

use std::io::{self, BufRead, Write};

use crate::engine::Engine;
use crate::error::EngineError;
use crate::types::{ErrorOutput, ImpactResult, StatsInput};
use crate::validate::validate_stats;

/// Counts from one pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
  pub scored: usize,
  pub rejected: usize,
}

/// Parse, validate and score one non-blank line.
pub fn score_line(engine: &Engine, line: &str) -> Result<ImpactResult, EngineError> {
  let stats: StatsInput = serde_json::from_str(line)?;
  validate_stats(&stats)?;
  Ok(engine.compute(&stats))
}

/// Wire form of a rejected line; validation failures name the offending field.
pub fn error_output(err: &EngineError) -> ErrorOutput {
  match err {
    EngineError::Validation { field, reason } => {
      ErrorOutput::new(reason.clone()).with_field(field.clone())
    }
    _ => ErrorOutput::new(err.to_string()),
  }
}

/// Score every line of `input`, writing one JSON line per non-blank input line.
///
/// Bad lines produce an ErrorOutput and processing continues; only I/O errors abort.
pub fn run<R: BufRead, W: Write>(
  engine: &Engine,
  input: R,
  mut output: W,
) -> io::Result<StreamSummary> {
  let mut summary = StreamSummary::default();

  for line in input.lines() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    match score_line(engine, trimmed) {
      Ok(result) => {
        summary.scored += 1;
        serde_json::to_writer(&mut output, &result)?;
      }
      Err(e) => {
        summary.rejected += 1;
        tracing::warn!("rejected input line: {}", e);
        serde_json::to_writer(&mut output, &error_output(&e))?;
      }
    }
    writeln!(output)?;
  }

  output.flush()?;
  Ok(summary)
}
