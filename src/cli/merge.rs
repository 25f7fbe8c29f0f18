//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::utils::{resolve, ResolveArgs};
use crate::merge::Merger;
use crate::render::{write_report, ReportOptions};

#[derive(Args, Debug, Default)]
pub struct MergeArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Write to a temporary file and replace the destination only on success
    #[arg(long)]
    pub atomic: bool,

    /// Write a JSON report of the merge to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Omit the timestamp from the report
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let atomic = args.atomic.then_some(true);
    let (base_dir, config) = resolve(&args.resolve, atomic)?;

    let merger = Merger::new(config);
    let plan = merger.plan(&base_dir);

    let stdout = std::io::stdout();
    let mut progress = stdout.lock();
    let outcome = merger
        .run(&plan, &mut progress)
        .with_context(|| format!("Merge into {} failed", plan.destination.display()))?;
    progress.flush()?;

    if let Some(report_path) = args.report {
        write_report(
            &report_path,
            &outcome,
            ReportOptions { include_timestamp: !args.no_timestamp },
        )?;
    }
    Ok(())
}
