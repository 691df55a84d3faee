//! Output directory planning.
//!
//! Results go to `--out` when given, otherwise to a `min/` folder next to the
//! inputs. The directory is created on demand, but only after checking that
//! we can actually write where it will live: failing up front is friendlier
//! than one permission error per image.

use crate::types::DirState;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Folder created inside the input directory when `--out` is not given.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "min";

#[derive(Error, Debug)]
pub enum PlanError {
    #[error(
        "Cannot write to {}. Please check the directory permissions.",
        .0.display()
    )]
    NotWritable(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Absolute output directory for a batch.
///
/// A relative override is resolved against the current directory.
pub fn resolve_output_dir(
    input_dir: &Path,
    out_override: Option<&Path>,
) -> Result<PathBuf, PlanError> {
    match out_override {
        Some(dir) => Ok(std::path::absolute(dir)?),
        None => Ok(input_dir.join(DEFAULT_OUTPUT_SUBDIR)),
    }
}

/// Make sure `dir` exists and report whether it already held anything.
///
/// A missing directory is created (with any missing parents) once the nearest
/// existing ancestor passes [`is_writable`].
pub fn ensure_exists(dir: &Path) -> Result<DirState, PlanError> {
    if dir.is_dir() {
        let state = if is_empty(dir)? {
            DirState::Empty
        } else {
            DirState::NonEmpty
        };
        return Ok(state);
    }

    // Something that is not a directory is in the way
    if dir.exists() {
        return Err(PlanError::NotWritable(dir.to_path_buf()));
    }

    match nearest_existing_ancestor(dir) {
        Some(parent) if is_writable(parent) => {}
        _ => return Err(PlanError::NotWritable(dir.to_path_buf())),
    }

    fs::create_dir_all(dir)?;
    debug!("created output directory {}", dir.display());
    Ok(DirState::Created)
}

/// Whether new files can be created in `dir`.
///
/// Probes by creating (and immediately removing) a temporary file, which
/// covers ACLs and read-only mounts that mode bits alone would miss.
pub fn is_writable(dir: &Path) -> bool {
    dir.is_dir()
        && tempfile::Builder::new()
            .prefix(".diet-image-probe")
            .tempfile_in(dir)
            .is_ok()
}

fn is_empty(dir: &Path) -> Result<bool, PlanError> {
    Ok(fs::read_dir(dir)?.next().is_none())
}

fn nearest_existing_ancestor(dir: &Path) -> Option<&Path> {
    dir.ancestors().skip(1).find(|p| p.exists())
}
