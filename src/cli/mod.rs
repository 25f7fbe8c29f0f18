//! Command-line interface for modmerge
//!
//! `merge` (the default when no subcommand is given), `plan` and
//! `completions` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod completions;
mod merge;
mod plan;
mod utils;

/// Concatenate an ordered list of source modules into a single file
#[derive(Parser)]
#[command(name = "modmerge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge the configured modules into the destination file
    Merge(merge::MergeArgs),

    /// Show the resolved merge order without writing anything
    Plan(plan::PlanArgs),

    /// Print shell completions
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // A valid RUST_LOG wins outright; otherwise --verbose picks DEBUG over WARN.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    // Stdout carries merge progress only, so logs go to stderr.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        None => merge::run(merge::MergeArgs::default()),
        Some(Commands::Merge(args)) => merge::run(args),
        Some(Commands::Plan(args)) => plan::run(args),
        Some(Commands::Completions(args)) => completions::run(args),
    }
}
