//! The merge pass itself

use super::error::MergeError;
use super::plan::build_plan;
use crate::domain::{Config, MergeOutcome, MergePlan, ModuleSource};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Concatenates configured modules into the destination file.
pub struct Merger {
    config: Config,
}

impl Merger {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write through a temporary file and rename it over the destination only
    /// once every module has been copied.
    pub fn atomic(mut self, atomic: bool) -> Self {
        self.config.atomic = atomic;
        self
    }

    pub fn plan(&self, base_dir: &Path) -> MergePlan {
        build_plan(base_dir, &self.config)
    }

    /// Run `plan`, writing one line per module to `progress` as each module is
    /// opened.
    pub fn run(&self, plan: &MergePlan, progress: &mut dyn Write) -> Result<MergeOutcome, MergeError> {
        tracing::debug!(
            "Merging {} module(s) into {} (atomic: {})",
            plan.sources.len(),
            plan.destination.display(),
            self.config.atomic
        );

        let outcome = if self.config.atomic {
            run_atomic(plan, progress)?
        } else {
            run_in_place(plan, progress)?
        };

        tracing::info!(
            "Merged {} module(s), {} bytes into {}",
            outcome.modules.len(),
            outcome.total_bytes,
            outcome.destination.display()
        );
        Ok(outcome)
    }
}

/// Delete the destination, create it fresh and append every module. A failure
/// part way through leaves whatever was already written.
fn run_in_place(plan: &MergePlan, progress: &mut dyn Write) -> Result<MergeOutcome, MergeError> {
    remove_stale_destination(&plan.destination)?;

    let file = File::create(&plan.destination).map_err(|e| MergeError::write(&plan.destination, e))?;
    let mut writer = BufWriter::new(file);
    let outcome = append_modules(plan, &mut writer, progress)?;
    writer.flush().map_err(|e| MergeError::write(&plan.destination, e))?;
    Ok(outcome)
}

/// Append into a temporary sibling of the destination and persist it on
/// success. On failure the temporary file is dropped and the previous
/// destination, if any, is untouched.
fn run_atomic(plan: &MergePlan, progress: &mut dyn Write) -> Result<MergeOutcome, MergeError> {
    let dir = match plan.destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = temp_destination(dir, &plan.destination).map_err(|e| MergeError::write(dir, e))?;
    let mut writer = BufWriter::new(tmp);
    let outcome = append_modules(plan, &mut writer, progress)?;

    let tmp = writer.into_inner().map_err(|e| MergeError::write(&plan.destination, e.into_error()))?;
    tmp.persist(&plan.destination).map_err(|e| MergeError::write(&plan.destination, e.error))?;
    Ok(outcome)
}

/// Create the temporary file with the permissions an in-place write would
/// leave: the existing destination's mode if there is one, otherwise 0o666
/// under the process umask as `File::create` does.
fn temp_destination(dir: &Path, destination: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".modmerge");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;

    if let Ok(meta) = fs::metadata(destination) {
        if meta.is_file() {
            fs::set_permissions(tmp.path(), meta.permissions())?;
        }
    }
    Ok(tmp)
}

fn remove_stale_destination(destination: &Path) -> Result<(), MergeError> {
    if destination.is_file() {
        tracing::debug!("Removing stale destination {}", destination.display());
        fs::remove_file(destination).map_err(|source| MergeError::DestinationCleanup {
            path: destination.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn append_modules<W: Write>(
    plan: &MergePlan,
    writer: &mut W,
    progress: &mut dyn Write,
) -> Result<MergeOutcome, MergeError> {
    let mut outcome = MergeOutcome::new(&plan.destination);

    for source in &plan.sources {
        let file = open_module(source)?;
        writeln!(progress, "{}", source.path.display()).map_err(MergeError::Progress)?;

        let mut reader = BufReader::new(file);
        let bytes = copy_verbatim(&mut reader, writer, source, &plan.destination)?;
        tracing::debug!("  {} ({} bytes)", source.name, bytes);
        outcome.push(source, bytes);
    }

    progress.flush().map_err(MergeError::Progress)?;
    Ok(outcome)
}

/// Open a module for reading. Anything that is not a regular file fails here,
/// before its progress line is printed.
fn open_module(source: &ModuleSource) -> Result<File, MergeError> {
    let file = File::open(&source.path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            MergeError::ModuleNotFound { name: source.name.clone(), path: source.path.clone() }
        }
        _ => MergeError::read(&source.path, e),
    })?;

    let meta = file.metadata().map_err(|e| MergeError::read(&source.path, e))?;
    if !meta.is_file() {
        return Err(MergeError::read(
            &source.path,
            io::Error::new(io::ErrorKind::Other, "not a regular file"),
        ));
    }
    Ok(file)
}

/// Copy bytes unchanged, keeping read and write failures apart.
fn copy_verbatim<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    source: &ModuleSource,
    destination: &Path,
) -> Result<u64, MergeError> {
    let mut copied = 0u64;
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(MergeError::read(&source.path, e)),
        };
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        writer.write_all(chunk).map_err(|e| MergeError::write(destination, e))?;
        reader.consume(len);
        copied += len as u64;
    }
    Ok(copied)
}
