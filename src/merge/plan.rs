//! Resolve module names to source and destination paths

use crate::domain::{Config, MergePlan, ModuleSource};
use std::path::Path;

/// Build the merge plan for `base_dir`. Pure path arithmetic; nothing on disk
/// is inspected.
pub fn build_plan(base_dir: &Path, config: &Config) -> MergePlan {
    let sources = config
        .modules
        .iter()
        .map(|name| ModuleSource {
            name: name.clone(),
            path: base_dir.join(format!("{}{}", name, config.extension)),
        })
        .collect();

    MergePlan { destination: base_dir.join(&config.output), sources }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(modules: &[&str]) -> Config {
        Config { modules: modules.iter().map(|s| s.to_string()).collect(), ..Config::default() }
    }

    #[test]
    fn sources_follow_module_order() {
        let plan = build_plan(Path::new("/work"), &config(&["b", "a", "b"]));
        let paths: Vec<_> = plan.sources.iter().map(|s| s.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("/work/b.js").to_path_buf(),
                Path::new("/work/a.js").to_path_buf(),
                Path::new("/work/b.js").to_path_buf(),
            ]
        );
        assert_eq!(plan.destination, Path::new("/work/webglu.complete.js"));
    }

    #[test]
    fn empty_extension_uses_name_as_file_name() {
        let cfg = Config { extension: String::new(), ..config(&["lib.mjs"]) };
        let plan = build_plan(Path::new("/work"), &cfg);
        assert_eq!(plan.sources[0].path, Path::new("/work/lib.mjs"));
    }

    #[test]
    fn missing_lists_only_absent_files() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("present.js"), "1").expect("write");

        let plan = build_plan(tmp.path(), &config(&["present", "absent"]));
        let missing: Vec<_> = plan.missing().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(missing, vec!["absent"]);
    }
}
