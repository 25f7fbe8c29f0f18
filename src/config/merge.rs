//! Layer CLI arguments over a loaded config

use crate::domain::{normalize_extension, split_module_list, Config};

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub modules: Option<String>,
    pub extension: Option<String>,
    pub output: Option<String>,
    pub atomic: Option<bool>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(modules) = cli.modules {
        config.modules = split_module_list(&modules);
    }
    if let Some(ext) = cli.extension {
        config.extension = normalize_extension(&ext);
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(atomic) = cli.atomic {
        config.atomic = atomic;
    }
    config
}
