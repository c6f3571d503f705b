// File: crates/perfplot/src/main.rs
// Summary: CLI entry: parse flags, run the pipeline, report the written file.

use anyhow::{Context, Result};
use clap::Parser;
use perfplot::{run, Config, PerfPlotError};

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"));

    let config = Config::parse();
    let summary = match run(&config) {
        Ok(summary) => summary,
        Err(e @ PerfPlotError::DataLoad(_)) => {
            return Err(e).with_context(|| format!("loading measurements from {}", config.input.display()));
        }
        Err(e @ PerfPlotError::Render(_)) => {
            return Err(e).with_context(|| format!("writing chart to {}", config.output.display()));
        }
    };

    println!(
        "Wrote {} ({} rows, {} successful downloads)",
        summary.output.display(),
        summary.rows,
        summary.successes
    );
    Ok(())
}
