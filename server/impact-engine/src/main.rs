//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a StatsInput. Output lines are either:
//! - An ImpactResult (for every valid record)
//! - An ErrorOutput (when parsing or validation fails)
//!
//! Logs go to stderr; set RUST_LOG=impact_engine=debug for per-record scoring details.

use impact_engine::{stream, Engine};
use std::io::{self, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::from_default_env())
    .init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let out = io::BufWriter::new(stdout.lock());
  let engine = Engine::with_defaults();

  match stream::run(&engine, stdin.lock(), out) {
    Ok(summary) => {
      tracing::info!(
        scored = summary.scored,
        rejected = summary.rejected,
        "impact-engine finished"
      );
    }
    Err(e) => {
      let _ = writeln!(io::stderr(), "impact-engine: io error: {}", e);
      std::process::exit(1);
    }
  }
}
