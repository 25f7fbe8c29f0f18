//! Core data types shared across the merge pipeline

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Destination file name used when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "webglu.complete.js";

/// Source file extension used when nothing else is configured.
pub const DEFAULT_EXTENSION: &str = ".js";

/// Version of the JSON report layout written by `--report`.
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// The WebGLU build order. Base utilities come before the code that uses them.
pub fn default_modules() -> &'static [&'static str] {
    &[
        "webglu",
        "crazyglu",
        "gameglu",
        "Util",
        "Constants",
        "DefaultUniformActions",
        "GLSL",
        "GLU",
        "Animation",
        "Object",
        "Texture",
        "Framebuffer",
        "Material",
        "Renderer",
        "ControlProfiles",
    ]
}

/// Merge configuration after defaults, config file and CLI have been layered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Ordered module names. Order decides concatenation order.
    #[serde(deserialize_with = "deserialize_module_list")]
    pub modules: Vec<String>,
    /// Appended to each module name to form its file name.
    #[serde(deserialize_with = "deserialize_extension")]
    pub extension: String,
    /// Destination file name, relative to the base directory.
    pub output: String,
    /// Write through a temporary file and rename on success.
    pub atomic: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modules: default_modules().iter().map(|s| s.to_string()).collect(),
            extension: DEFAULT_EXTENSION.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            atomic: false,
        }
    }
}

/// Split a comma-separated module list, trimming whitespace and dropping
/// empty entries.
pub fn split_module_list(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Ensure an extension carries exactly one leading dot. An empty extension
/// stays empty so modules can name their files in full.
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    if trimmed.is_empty() || trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    String(String),
    List(Vec<String>),
}

fn deserialize_module_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::String(s) => split_module_list(&s),
        StringOrList::List(items) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

fn deserialize_extension<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_extension(&raw))
}

/// One module resolved to the file it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSource {
    pub name: String,
    pub path: PathBuf,
}

/// Fully resolved merge: where every module comes from and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    pub destination: PathBuf,
    pub sources: Vec<ModuleSource>,
}

impl MergePlan {
    /// Sources whose files do not currently exist.
    pub fn missing(&self) -> Vec<&ModuleSource> {
        self.sources.iter().filter(|s| !s.path.is_file()).collect()
    }
}

/// A module that made it into the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedModule {
    pub name: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Summary of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub destination: PathBuf,
    pub modules: Vec<MergedModule>,
    pub total_bytes: u64,
}

impl MergeOutcome {
    pub fn new(destination: &Path) -> Self {
        Self { destination: destination.to_path_buf(), modules: Vec::new(), total_bytes: 0 }
    }

    pub fn push(&mut self, source: &ModuleSource, bytes: u64) {
        self.total_bytes += bytes;
        self.modules.push(MergedModule { name: source.name.clone(), path: source.path.clone(), bytes });
    }
}
