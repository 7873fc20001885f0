//! k-medoids CLI
//!
//! Front end for the `kmedoids-core` engine: parses the point file,
//! validates arguments, runs the clustering loop, and writes the final
//! assignments and medoids as text.
//!
//! # Usage
//!
//! ```text
//! kmedoids <data-file> <num-clusters> <num-threads> [--scheduler work-sharing|chunk-and-join]
//!          [--max-iterations N] [--output-dir DIR] [--stats] [--json] [-v...]
//! ```
//!
//! The input file starts with `N D` followed by N rows of D
//! whitespace-separated coordinates. Outputs land in `--output-dir` as
//! `clusters.txt` (one cluster index per point) and `medoids.txt`
//! (K rows of D values at 3-decimal precision).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use kmedoids_core::{EngineConfig, KMedoids, Scheduler};

mod error;
mod io;
mod report;

use error::{CliError, CliResult};

/// Parallel k-medoids clustering over a whitespace-delimited point file.
#[derive(Parser)]
#[command(name = "kmedoids")]
#[command(version)]
#[command(about = "Parallel k-medoids clustering over a whitespace-delimited point file")]
struct Cli {
    /// Input file: an `N D` header followed by N rows of D coordinates
    data_file: PathBuf,

    /// Number of clusters (K, at most the number of points)
    num_clusters: usize,

    /// Number of worker threads
    num_threads: usize,

    /// Iteration cap for the clustering loop
    #[arg(long, default_value_t = kmedoids_core::config::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Scheduling backend for the parallel steps
    #[arg(long, value_enum, default_value_t = SchedulerArg::WorkSharing)]
    scheduler: SchedulerArg,

    /// Directory receiving clusters.txt and medoids.txt
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Print per-cluster diagnostics (sizes, centroids, spread)
    #[arg(long)]
    stats: bool,

    /// Emit a JSON run summary instead of the plain timing line
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// CLI-facing names for the core's scheduling backends.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchedulerArg {
    /// Work-sharing loop on a persistent thread pool
    WorkSharing,
    /// Per-iteration thread spawn over static chunks
    ChunkAndJoin,
}

impl From<SchedulerArg> for Scheduler {
    fn from(arg: SchedulerArg) -> Self {
        match arg {
            SchedulerArg::WorkSharing => Scheduler::WorkSharing,
            SchedulerArg::ChunkAndJoin => Scheduler::ChunkAndJoin,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let dataset = io::read_dataset(&cli.data_file)?;
    info!(
        path = %cli.data_file.display(),
        n = dataset.len(),
        d = dataset.num_dims(),
        "dataset loaded"
    );

    let config = EngineConfig::new(cli.num_clusters, cli.num_threads)?
        .with_max_iterations(cli.max_iterations)?
        .with_scheduler(cli.scheduler.into());

    // The engine owns its copy; the original stays around for the
    // diagnostics pass.
    let engine = KMedoids::new(dataset.clone(), config)?;
    let outcome = engine.fit();

    io::write_assignments(&cli.output_dir.join("clusters.txt"), &outcome.assignments)?;
    io::write_medoids(&cli.output_dir.join("medoids.txt"), outcome.medoids.rows())?;
    info!(dir = %cli.output_dir.display(), "wrote clusters.txt and medoids.txt");

    if cli.json {
        let summary = report::RunSummary::new(
            &dataset,
            &outcome,
            cli.num_threads,
            cli.scheduler.into(),
        );
        let rendered = serde_json::to_string_pretty(&summary).map_err(CliError::Summary)?;
        println!("{rendered}");
    } else {
        println!(
            "k-medoids clustering time: {:.4} seconds",
            outcome.elapsed.as_secs_f64()
        );
    }

    if cli.stats {
        report::print_cluster_stats(&dataset, &outcome);
    }

    Ok(())
}
