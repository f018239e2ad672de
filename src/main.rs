//! hopfield-sync: synchronous Hopfield convergence analyser.
//!
//! With no arguments, runs both reference experiments and narrates every
//! trajectory on stdout. Logs go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;

use hopfield::network::{EngineConfig, Experiment, ExperimentReport};
use hopfield::presets::{self, Preset};
use hopfield::report::{self, Narrator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CaseSelection {
    All,
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Fixed-point and cycle analysis of small synchronous Hopfield networks.
#[derive(Parser, Debug)]
#[command(name = "hopfield-sync", version)]
struct Cli {
    /// Which reference experiment to run.
    #[arg(long, value_enum, default_value_t = CaseSelection::All)]
    case: CaseSelection,

    /// Run a seeded random symmetric network of this order instead of the presets.
    #[arg(long, value_name = "ORDER", value_parser = clap::value_parser!(u8).range(1..=3))]
    random: Option<u8>,

    /// Seed for --random.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Draw every weight independently (no symmetry) for --random.
    #[arg(long, default_value_t = false)]
    asymmetric: bool,

    /// Iteration at which a run is abandoned.
    #[arg(long, default_value_t = hopfield::config::MAXIMUM_ITERATIONS)]
    max_iterations: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn experiments(cli: &Cli) -> Result<Vec<Experiment>> {
    let config = EngineConfig {
        max_iterations: cli.max_iterations,
    };

    if let Some(order) = cli.random {
        let order = usize::from(order);
        let (weights, label) = if cli.asymmetric {
            (
                presets::random_general(order, cli.seed),
                format!("RANDOM {}x{} (seed {}, asymmetric)", order, order, cli.seed),
            )
        } else {
            (
                presets::random_symmetric(order, cli.seed),
                format!("RANDOM {}x{} (seed {})", order, order, cli.seed),
            )
        };
        let exp = Experiment::new(label, weights, config).context("invalid engine configuration")?;
        return Ok(vec![exp]);
    }

    let selected: Vec<Preset> = match cli.case {
        CaseSelection::All => Preset::all().to_vec(),
        CaseSelection::One => vec![Preset::CaseOne],
        CaseSelection::Two => vec![Preset::CaseTwo],
    };

    selected
        .into_iter()
        .map(|p| {
            Experiment::new(p.label(), p.weights(), config.clone())
                .with_context(|| format!("failed to set up {}", p.label()))
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    tracing::info!("hopfield-sync v{}", env!("CARGO_PKG_VERSION"));

    let mut reports: Vec<ExperimentReport> = Vec::new();
    for exp in experiments(&cli)? {
        tracing::info!("Weights for {}:\n{}", exp.label(), exp.engine().weights());
        let report = exp
            .run()
            .with_context(|| format!("experiment {} failed", exp.label()))?;
        reports.push(report);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            let mut narrator = Narrator::new(&mut out);
            narrator.banner("STARTED")?;
            for report in &reports {
                narrator.experiment(report)?;
            }
            narrator.banner("FINISHED")?;
        }
        OutputFormat::Json => {
            report::write_json(&mut out, &reports).context("failed to write JSON report")?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
