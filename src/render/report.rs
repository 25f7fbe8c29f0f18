//! Report JSON generation.

use crate::domain::{MergeOutcome, REPORT_SCHEMA_VERSION};
use crate::utils::{display_path, file_sha256};
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub include_timestamp: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { include_timestamp: true }
    }
}

/// Write a JSON summary of a successful merge to `report_path`.
///
/// The digest is computed from the destination as it sits on disk, so it can
/// be compared across runs.
pub fn write_report(report_path: &Path, outcome: &MergeOutcome, options: ReportOptions) -> Result<()> {
    let digest = file_sha256(&outcome.destination)
        .with_context(|| format!("Failed hashing {}", outcome.destination.display()))?;

    let modules = outcome
        .modules
        .iter()
        .map(|m| {
            json!({
                "name": m.name,
                "path": display_path(&m.path),
                "bytes": m.bytes,
            })
        })
        .collect::<Vec<_>>();

    let mut report = Map::new();
    report.insert("schema_version".to_string(), Value::String(REPORT_SCHEMA_VERSION.to_string()));
    if options.include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert("destination".to_string(), Value::String(display_path(&outcome.destination)));
    report.insert("modules".to_string(), Value::Array(modules));
    report.insert("total_bytes".to_string(), json!(outcome.total_bytes));
    report.insert("sha256".to_string(), Value::String(digest));

    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating report directory: {}", parent.display()))?;
    }
    std::fs::write(report_path, serde_json::to_string_pretty(&Value::Object(report))?)
        .with_context(|| format!("Failed writing report: {}", report_path.display()))?;
    tracing::debug!("Wrote merge report to {}", report_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModuleSource;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn outcome_in(dir: &Path) -> MergeOutcome {
        let destination = dir.join("webglu.complete.js");
        fs::write(&destination, "x=1;\ny=2;\n").expect("write destination");
        let mut outcome = MergeOutcome::new(&destination);
        outcome.push(&ModuleSource { name: "A".into(), path: dir.join("A.js") }, 5);
        outcome.push(&ModuleSource { name: "B".into(), path: dir.join("B.js") }, 5);
        outcome
    }

    #[test]
    fn report_lists_modules_in_merge_order() {
        let tmp = TempDir::new().expect("tmp");
        let report_path = tmp.path().join("out").join("report.json");
        let outcome = outcome_in(tmp.path());

        write_report(&report_path, &outcome, ReportOptions::default()).expect("write report");

        let parsed: Value =
            serde_json::from_str(&fs::read_to_string(&report_path).expect("read")).expect("json");
        assert_eq!(parsed["schema_version"], json!(REPORT_SCHEMA_VERSION));
        assert!(parsed["generated_at"].is_string());
        assert_eq!(parsed["modules"][0]["name"], json!("A"));
        assert_eq!(parsed["modules"][1]["name"], json!("B"));
        assert_eq!(parsed["modules"][1]["bytes"], json!(5));
        assert_eq!(parsed["total_bytes"], json!(10));
    }

    #[test]
    fn report_digest_matches_destination() {
        let tmp = TempDir::new().expect("tmp");
        let report_path = tmp.path().join("report.json");
        let outcome = outcome_in(tmp.path());

        write_report(&report_path, &outcome, ReportOptions { include_timestamp: false })
            .expect("write report");

        let parsed: Value =
            serde_json::from_str(&fs::read_to_string(&report_path).expect("read")).expect("json");
        assert!(parsed.get("generated_at").is_none());
        let expected = file_sha256(&outcome.destination).expect("hash");
        assert_eq!(parsed["sha256"], json!(expected));
    }

    #[test]
    fn report_directory_failure_names_the_directory() {
        let tmp = TempDir::new().expect("tmp");
        let outcome = outcome_in(tmp.path());
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "").expect("write blocker");

        let err = write_report(&blocker.join("report.json"), &outcome, ReportOptions::default())
            .expect_err("should fail");
        assert!(err.to_string().contains("Failed creating report directory"));
    }
}
