//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;

/// Flags that decide which modules are merged and where.
#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Directory holding the module files (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Path to config file (modmerge.toml or .modmerge.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Module names in merge order (comma-separated)
    #[arg(short = 'm', long, value_name = "NAMES")]
    pub modules: Option<String>,

    /// Extension appended to each module name (default: .js)
    #[arg(short = 'x', long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Destination file name inside DIR (default: webglu.complete.js)
    #[arg(short, long, value_name = "NAME")]
    pub output: Option<String>,
}

/// Canonicalize the base directory and layer CLI flags over its config.
pub fn resolve(args: &ResolveArgs, atomic: Option<bool>) -> Result<(PathBuf, Config)> {
    let dir = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let base_dir = dir
        .canonicalize()
        .with_context(|| format!("Cannot access module directory: {}", dir.display()))?;
    if !base_dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", base_dir.display());
    }

    let file_config = load_config(&base_dir, args.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            modules: args.modules.clone(),
            extension: args.extension.clone(),
            output: args.output.clone(),
            atomic,
        },
    );
    tracing::debug!("Resolved config: {:?}", config);
    Ok((base_dir, config))
}
