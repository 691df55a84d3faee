//! Input path resolution.
//!
//! Decides whether the input is a single image or a folder of images and
//! lists the filenames to resize. Filenames are relative to the input
//! directory, which is the file's parent in single-file mode.
//!
//! Folder mode only looks at the top level: subdirectories are ignored (which
//! also keeps the default `min/` output folder out of its own input), and so
//! are dotfiles like `.DS_Store` or `.thumbs`.

use crate::types::PathClassification;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(
        "Cannot resolve {} correctly. Please check the path is an image file or a folder.",
        .0.display()
    )]
    PathNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input path after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Absolute form of the path given on the command line.
    pub path: PathBuf,
    pub classification: PathClassification,
    /// Directory the target filenames are relative to.
    pub input_dir: PathBuf,
    pub targets: Vec<String>,
}

/// Classify a path. Symlinks are followed.
pub fn classify(path: &Path) -> PathClassification {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => PathClassification::File,
        Ok(meta) if meta.is_dir() => PathClassification::Directory,
        _ => PathClassification::Unknown,
    }
}

/// Whether a directory entry name is hidden by the dotfile convention.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List the filenames to resize for an already-classified path.
///
/// Directory listings are sorted by filename.
pub fn list_targets(
    path: &Path,
    classification: PathClassification,
) -> Result<Vec<String>, ResolveError> {
    match classification {
        PathClassification::File => path
            .file_name()
            .map(|name| vec![name.to_string_lossy().into_owned()])
            .ok_or_else(|| ResolveError::PathNotFound(path.to_path_buf())),
        PathClassification::Directory => list_directory(path),
        PathClassification::Unknown => Err(ResolveError::PathNotFound(path.to_path_buf())),
    }
}

fn list_directory(dir: &Path) -> Result<Vec<String>, ResolveError> {
    let mut names = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // The directory itself could not be read
            Err(err) if err.depth() == 0 => return Err(ResolveError::Io(err.into())),
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if is_hidden(&name) {
            debug!("skipping hidden file {name}");
            continue;
        }
        names.push(name.into_owned());
    }

    Ok(names)
}

/// Make `path` absolute, classify it and list its targets.
///
/// Relative paths are resolved against the current directory.
pub fn resolve_input(path: &Path) -> Result<ResolvedInput, ResolveError> {
    let path = std::path::absolute(path)
        .map_err(|_| ResolveError::PathNotFound(path.to_path_buf()))?;
    let classification = classify(&path);

    let input_dir = match classification {
        PathClassification::File => path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| ResolveError::PathNotFound(path.clone()))?,
        PathClassification::Directory => path.clone(),
        PathClassification::Unknown => return Err(ResolveError::PathNotFound(path)),
    };

    let targets = list_targets(&path, classification)?;
    debug!(
        "resolved {} as {:?} with {} target(s)",
        path.display(),
        classification,
        targets.len()
    );

    Ok(ResolvedInput {
        path,
        classification,
        input_dir,
        targets,
    })
}
