//! spherecast CLI - probe the intersection kernel from the command line
//!
//! Reads a probe file (TOML, or JSON for `.json` paths) describing materials,
//! primitives and rays, and prints query results as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;
use std::path::{Path, PathBuf};

mod commands;
mod scene;

use commands::RangeOverride;
use scene::ProbeFile;

#[derive(Parser)]
#[command(name = "spherecast")]
#[command(about = "Ray-sphere intersection probe", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace every ray and print its closest hit (null on a miss)
    Probe {
        /// Probe file
        file: PathBuf,
        /// Override the lower bound of the hit range
        #[arg(long)]
        t_min: Option<f64>,
        /// Override the upper bound of the hit range
        #[arg(long)]
        t_max: Option<f64>,
    },
    /// Print the bounding box of every primitive and of the whole file
    Bounds {
        /// Probe file
        file: PathBuf,
        /// Start of the time interval
        #[arg(long)]
        t0: Option<f64>,
        /// End of the time interval
        #[arg(long)]
        t1: Option<f64>,
    },
    /// Validate primitives and the query range
    Check {
        /// Probe file
        file: PathBuf,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load(path: &Path) -> Result<ProbeFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let file = ProbeFile::parse_for_path(path, &text)
        .with_context(|| format!("parsing {}", path.display()))?;
    log::info!(
        "loaded {}: {} materials, {} primitives, {} rays",
        path.display(),
        file.materials.len(),
        file.primitives.len(),
        file.rays.len()
    );
    Ok(file)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Probe { file, t_min, t_max } => {
            let probe_file = load(&file)?;
            let hits = commands::probe(&probe_file, RangeOverride { t_min, t_max })
                .with_context(|| format!("probing {}", file.display()))?;
            print_json(&hits, cli.pretty)?;
        }
        Commands::Bounds { file, t0, t1 } => {
            let probe_file = load(&file)?;
            let report = commands::bounds(&probe_file, t0, t1)
                .with_context(|| format!("computing bounds for {}", file.display()))?;
            print_json(&report, cli.pretty)?;
        }
        Commands::Check { file } => {
            let probe_file = load(&file)?;
            let issues = commands::check(&probe_file)
                .with_context(|| format!("checking {}", file.display()))?;
            if !issues.is_empty() {
                print_json(&issues, cli.pretty)?;
                anyhow::bail!("{} invalid primitive(s) in {}", issues.len(), file.display());
            }
            println!("{}: ok", file.display());
        }
    }

    Ok(())
}
