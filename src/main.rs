//! modmerge command-line entrypoint

use anyhow::Result;

fn main() -> Result<()> {
    modmerge::cli::run()
}
