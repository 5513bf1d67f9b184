#![forbid(unsafe_code)]

//! Command-line arguments for the demo.
//!
//! Every option can also be set through an `FTIP_DEMO_*` environment variable.

use std::path::PathBuf;

use clap::Parser;

/// Replay a tooltip scenario and print one JSON line per step.
#[derive(Debug, Clone, Parser)]
#[command(name = "ftip-demo", version, about)]
pub struct Args {
    /// Scenario file (JSON). Runs the built-in hover scenario when omitted.
    #[arg(long, value_name = "FILE", env = "FTIP_DEMO_SCENARIO")]
    pub scenario: Option<PathBuf>,

    /// Log filter directive, e.g. `ftip_runtime=trace`.
    #[arg(long, value_name = "FILTER", default_value = "warn", env = "FTIP_DEMO_LOG")]
    pub log_filter: String,

    /// Emit logs as JSON (to stderr).
    #[arg(long, env = "FTIP_DEMO_JSON_LOGS")]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["ftip-demo"]).unwrap();
        assert_eq!(args.scenario, None);
        assert_eq!(args.log_filter, "warn");
        assert!(!args.json_logs);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "ftip-demo",
            "--scenario",
            "scenarios/click.json",
            "--log-filter",
            "ftip_runtime=debug",
            "--json-logs",
        ])
        .unwrap();
        assert_eq!(args.scenario, Some(PathBuf::from("scenarios/click.json")));
        assert_eq!(args.log_filter, "ftip_runtime=debug");
        assert!(args.json_logs);
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Args::try_parse_from(["ftip-demo", "--screen=3"]).is_err());
    }
}
