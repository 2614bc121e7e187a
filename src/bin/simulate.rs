//! Design balance simulator CLI.
//!
//! Loads a scenario file and runs one engine module over it.
//!
//! Usage:
//!   cargo run --bin simulate -- <COMMAND> <SCENARIO> [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate -- progression scenarios/demo.json
//!   cargo run --bin simulate -- combat scenarios/demo.json -n 5000 -s 42
//!   cargo run --bin simulate -- loot scenarios/demo.json --json

use clap::{Args, Parser, Subcommand};
use litforge::simulator::{run_combat, run_loot, run_progression, Scenario, SimConfig, SimReport};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Balance simulator for progression, combat and loot designs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v for details, -vv for debug logs)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a character across the scenario's story
    Progression {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Save JSON report
        #[arg(long)]
        json: bool,
    },
    /// Simulate repeated uses of the scenario's combat action
    Combat(BatchArgs),
    /// Roll the scenario's loot table and assess its balance
    Loot(BatchArgs),
}

#[derive(Args)]
struct BatchArgs {
    /// Scenario JSON file
    scenario: PathBuf,

    /// Number of trials
    #[arg(short = 'n', long, default_value_t = litforge::constants::DEFAULT_TRIALS)]
    trials: u32,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Save JSON report
    #[arg(long)]
    json: bool,
}

impl BatchArgs {
    fn config(&self, verbose: u8) -> SimConfig {
        SimConfig {
            trials: self.trials,
            seed: self.seed,
            verbosity: verbose.saturating_add(1),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("simulation failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> litforge::Result<()> {
    let (report, json) = match &cli.command {
        Commands::Progression { scenario, json } => {
            let scenario = Scenario::from_file(scenario)?;
            (run_progression(scenario.progression()?)?, *json)
        }
        Commands::Combat(args) => {
            let scenario = Scenario::from_file(&args.scenario)?;
            (
                run_combat(&args.config(cli.verbose), scenario.combat()?)?,
                args.json,
            )
        }
        Commands::Loot(args) => {
            let scenario = Scenario::from_file(&args.scenario)?;
            (
                run_loot(&args.config(cli.verbose), scenario.loot()?)?,
                args.json,
            )
        }
    };

    println!("{}", report.to_text());

    if json {
        save_json(&report)?;
    }
    Ok(())
}

fn save_json(report: &SimReport) -> litforge::Result<()> {
    let filename = format!(
        "sim_report_{}_{}.json",
        report.kind(),
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    std::fs::write(&filename, report.to_json()?)?;
    println!("JSON report saved to: {}", filename);
    Ok(())
}
