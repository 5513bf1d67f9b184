#![forbid(unsafe_code)]

//! ftip demo: replay a tooltip scenario and print what the engine decides.
//!
//! Output is one JSON object per step on stdout; logs go to stderr.

mod cli;
mod scenario;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::scenario::Scenario;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::builtin()?,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for report in scenario.run()? {
        serde_json::to_writer(&mut out, &report)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&args.log_filter)
        .with_context(|| format!("invalid log filter `{}`", args.log_filter))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let installed = if args.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!(e))
}
