//! Plan command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{resolve, ResolveArgs};
use crate::merge::build_plan;
use crate::utils::format_with_commas;

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

pub fn run(args: PlanArgs) -> Result<()> {
    let (base_dir, config) = resolve(&args.resolve, None)?;
    let plan = build_plan(&base_dir, &config);

    println!("Destination: {}", plan.destination.display());
    println!("Modules ({}):", plan.sources.len());
    let mut total_bytes = 0u64;
    for (i, source) in plan.sources.iter().enumerate() {
        match std::fs::metadata(&source.path) {
            Ok(meta) if meta.is_file() => {
                total_bytes += meta.len();
                println!(
                    "  {:>2}. {} ({} bytes)",
                    i + 1,
                    source.path.display(),
                    format_with_commas(meta.len())
                );
            }
            _ => println!("  {:>2}. {} (missing)", i + 1, source.path.display()),
        }
    }
    println!("Total bytes: {}", format_with_commas(total_bytes));

    let missing = plan.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|s| s.name.as_str()).collect();
        anyhow::bail!("{} module file(s) missing: {}", missing.len(), names.join(", "));
    }
    Ok(())
}
