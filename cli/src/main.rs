//! ballot: replay a voting scenario and print its event log.

use std::path::PathBuf;

use anyhow::{bail, Context};
use ballot_cli::{run, Scenario};
use ballot_utils::{init_logging, LogFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "ballot", about = "Phase-gated voting scenario runner")]
struct Cli {
    /// Log format: "human" or "json". Overrides the scenario file.
    #[arg(long, global = true, env = "BALLOT_LOG_FORMAT")]
    log_format: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error". Overrides the scenario file.
    #[arg(long, global = true, env = "BALLOT_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Replay a scenario against a fresh voting process.
    Run {
        /// Path to the TOML scenario file.
        scenario: PathBuf,

        /// Stop at the first step whose outcome differs from its expectation.
        #[arg(long, env = "BALLOT_STOP_ON_ERROR")]
        stop_on_error: bool,

        /// Print the event log on stdout as newline-delimited JSON.
        #[arg(long)]
        events: bool,
    },
    /// Parse and validate a scenario without running it.
    Check {
        /// Path to the TOML scenario file.
        scenario: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = match &cli.command {
        Command::Run { scenario, .. } | Command::Check { scenario } => scenario.clone(),
    };
    let scenario = Scenario::from_toml_file(&path)
        .with_context(|| format!("loading scenario {}", path.display()))?;

    let format: LogFormat = match cli.log_format.as_deref() {
        Some(raw) => raw.parse()?,
        None => scenario.log_format()?,
    };
    let level = cli.log_level.as_deref().unwrap_or(&scenario.log_level);
    init_logging(format, level)?;

    match cli.command {
        Command::Check { .. } => {
            tracing::info!(
                owner = %scenario.owner,
                steps = scenario.steps.len(),
                "scenario is valid"
            );
            println!("{}: {} steps", path.display(), scenario.steps.len());
        }
        Command::Run {
            stop_on_error,
            events,
            ..
        } => {
            let report = run(&scenario, stop_on_error || scenario.stop_on_error);

            if events {
                for event in report.process.events() {
                    println!("{}", serde_json::to_string(event)?);
                }
            }

            tracing::info!(
                executed = report.executed,
                accepted = report.accepted,
                rejected = report.rejected,
                phase = %report.process.workflow_status(),
                "scenario finished"
            );
            if let Some(results) = report.process.results() {
                tracing::info!(
                    winning_proposal_id = results.winning_proposal_id,
                    description = %results.description,
                    vote_count = results.vote_count,
                    total_votes = results.total_votes,
                    "winner"
                );
                if !events {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                }
            }

            if !report.is_success() {
                for mismatch in &report.mismatches {
                    eprintln!("{}", serde_json::to_string(mismatch)?);
                }
                bail!(
                    "{} of {} steps did not match their expectation",
                    report.mismatches.len(),
                    report.executed
                );
            }
        }
    }

    Ok(())
}
