//! Module concatenation

use crate::domain::{Config, MergeOutcome};
use std::path::Path;

pub mod error;
pub mod merger;
pub mod plan;

pub use error::MergeError;
pub use merger::Merger;
pub use plan::build_plan;

/// Concatenate `module_names` from `base_dir` into `base_dir/webglu.complete.js`,
/// printing each source path to stdout as it is merged.
pub fn merge<S: AsRef<str>>(module_names: &[S], base_dir: &Path) -> Result<MergeOutcome, MergeError> {
    let config = Config {
        modules: module_names.iter().map(|m| m.as_ref().to_string()).collect(),
        ..Config::default()
    };
    let merger = Merger::new(config);
    let plan = merger.plan(base_dir);
    let stdout = std::io::stdout();
    let mut progress = stdout.lock();
    merger.run(&plan, &mut progress)
}
