//! Shared types passed between the resolve, plan, process and output stages.
//!
//! [`BatchResult`] and [`JobOutcome`] are also serialized for `--json` output,
//! so their field names are part of the CLI's machine-readable surface.

use serde::Serialize;
use std::path::PathBuf;

/// One invocation's worth of user input, resolved from the CLI.
///
/// `width`/`height` are validated to be at least 1 at the CLI boundary.
/// `None` means "keep that dimension" (derived from the other one, or the
/// original size when both are missing).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResizeRequest {
    pub input_path: PathBuf,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub prefix: String,
    pub out_dir: Option<PathBuf>,
}

/// What the input path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathClassification {
    File,
    Directory,
    /// Missing, unreadable, or neither a regular file nor a directory.
    Unknown,
}

/// State of the output directory after [`crate::plan::ensure_exists`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirState {
    Created,
    Empty,
    NonEmpty,
}

/// Terminal state of a single resize job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Succeeded,
    /// The user declined to overwrite an existing destination.
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobOutcome {
    pub filename: String,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobOutcome {
    pub fn succeeded(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            status: JobStatus::Succeeded,
            error: None,
        }
    }

    pub fn skipped(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            status: JobStatus::Skipped,
            error: None,
        }
    }

    pub fn failed(filename: &str, error: &dyn std::error::Error) -> Self {
        Self {
            filename: filename.to_string(),
            status: JobStatus::Failed,
            error: Some(error.to_string()),
        }
    }
}

/// Aggregated result of one batch. Built once by [`crate::output::summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub output_dir: PathBuf,
    pub success_count: usize,
    pub total: usize,
    /// In target order (sorted filenames), not completion order.
    pub outcomes: Vec<JobOutcome>,
}

impl BatchResult {
    pub fn count(&self, status: JobStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}
