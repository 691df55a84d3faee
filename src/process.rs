//! Per-file resize jobs.
//!
//! Each target filename becomes one job:
//!
//! ```text
//! destination exists? ──yes──> confirm overwrite ──no──> Skipped
//!         │ no                        │ yes
//!         └───────────┬───────────────┘
//!                read source ──err──> Failed
//!                     │
//!               backend.resize ──err──> Failed
//!                     │
//!                 Succeeded
//! ```
//!
//! ## Parallel Processing
//!
//! Jobs are fanned out with [rayon](https://docs.rs/rayon) and joined with a
//! plain `collect`, which only returns once every job has settled. Jobs never
//! return `Err`: read and resize failures are folded into the job's
//! [`JobOutcome`], so one bad image cannot stop the rest of the batch.
//!
//! Jobs share nothing mutable. Each one writes only its own
//! `<output_dir>/<prefix><filename>`, and destinations are unique because
//! source filenames are.

use crate::confirm::{Prompter, Question};
use crate::imaging::{BackendError, ImageBackend, ResizeParams};
use crate::types::{DirState, JobOutcome, PathClassification};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Resize(#[from] BackendError),
}

/// Settings shared by every job in a batch. Read-only once the batch starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub prefix: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl JobConfig {
    /// Output filename for a source filename.
    pub fn output_name(&self, filename: &str) -> String {
        format!("{}{}", self.prefix, filename)
    }

    pub fn destination(&self, filename: &str) -> PathBuf {
        self.output_dir.join(self.output_name(filename))
    }
}

/// Progress events emitted while a batch runs, for live display.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// Input resolved, before the output directory is touched.
    Started {
        input: PathBuf,
        classification: PathClassification,
        target_count: usize,
        width: Option<u32>,
        height: Option<u32>,
    },
    /// Output directory is in place; jobs are about to launch.
    OutputReady { output_dir: PathBuf, state: DirState },
    /// One job reached its terminal state. Sent in completion order.
    JobSettled(JobOutcome),
}

/// Run a single job to its terminal outcome.
pub fn run_job(
    backend: &impl ImageBackend,
    prompter: &impl Prompter,
    config: &JobConfig,
    filename: &str,
) -> JobOutcome {
    let destination = config.destination(filename);

    if destination.exists() {
        let question = Question::Overwrite(config.output_name(filename));
        if !prompter.confirm(&question) {
            debug!("{filename}: overwrite declined");
            return JobOutcome::skipped(filename);
        }
    }

    match resize_one(backend, config, filename, &destination) {
        Ok(()) => {
            debug!("{filename}: wrote {}", destination.display());
            JobOutcome::succeeded(filename)
        }
        Err(e) => {
            debug!("{filename}: {e}");
            JobOutcome::failed(filename, &e)
        }
    }
}

fn resize_one(
    backend: &impl ImageBackend,
    config: &JobConfig,
    filename: &str,
    destination: &Path,
) -> Result<(), JobError> {
    let source_path = config.input_dir.join(filename);
    let source = std::fs::read(&source_path).map_err(|source| JobError::Read {
        path: source_path.clone(),
        source,
    })?;

    backend.resize(
        &source,
        &ResizeParams {
            output: destination.to_path_buf(),
            width: config.width,
            height: config.height,
        },
    )?;
    Ok(())
}

/// Run one job per target and wait for all of them.
///
/// Outcomes come back in `targets` order. If `progress` is given, a
/// [`ProcessEvent::JobSettled`] is sent as each job finishes; a closed
/// receiver is ignored.
pub fn run_batch(
    backend: &impl ImageBackend,
    prompter: &impl Prompter,
    config: &JobConfig,
    targets: &[String],
    progress: Option<Sender<ProcessEvent>>,
) -> Vec<JobOutcome> {
    targets
        .par_iter()
        .map_with(progress, |progress, filename| {
            let outcome = run_job(backend, prompter, config, filename);
            if let Some(tx) = progress {
                tx.send(ProcessEvent::JobSettled(outcome.clone())).ok();
            }
            outcome
        })
        .collect()
}
