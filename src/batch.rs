//! Batch orchestration: resolve → plan → fan out jobs → summarize.
//!
//! Everything that can end the batch early happens here, before any job
//! starts: an input path that is not a file or folder, an output directory
//! that cannot be created, or the user declining to write into a folder that
//! already has files in it. Once jobs launch, the batch always runs to the
//! end and returns a [`BatchResult`].

use crate::confirm::{Prompter, Question};
use crate::imaging::ImageBackend;
use crate::output;
use crate::plan::{self, PlanError};
use crate::process::{self, JobConfig, ProcessEvent};
use crate::resolve::{self, ResolveError};
use crate::types::{BatchResult, DirState, PathClassification, ResizeRequest};
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error("Stopped without writing anything to {}.", .0.display())]
    Declined(PathBuf),
}

impl BatchError {
    /// Whether this is a user-correctable stop rather than a program failure.
    ///
    /// Graceful stops exit with status 0.
    pub fn is_graceful(&self) -> bool {
        matches!(
            self,
            BatchError::Resolve(ResolveError::PathNotFound(_))
                | BatchError::Plan(PlanError::NotWritable(_))
                | BatchError::Declined(_)
        )
    }
}

fn notify(progress: &Option<Sender<ProcessEvent>>, event: ProcessEvent) {
    if let Some(tx) = progress {
        tx.send(event).ok();
    }
}

/// Run one batch end to end.
///
/// Progress events are sent on `progress` as the batch advances; the sender
/// is dropped before this returns, so a receiving loop ends on its own.
pub fn run(
    request: &ResizeRequest,
    backend: &impl ImageBackend,
    prompter: &impl Prompter,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<BatchResult, BatchError> {
    let input = resolve::resolve_input(&request.input_path)?;
    notify(
        &progress,
        ProcessEvent::Started {
            input: input.path.clone(),
            classification: input.classification,
            target_count: input.targets.len(),
            width: request.width,
            height: request.height,
        },
    );

    let output_dir = plan::resolve_output_dir(&input.input_dir, request.out_dir.as_deref())?;
    let state = plan::ensure_exists(&output_dir)?;

    if input.classification == PathClassification::Directory
        && state == DirState::NonEmpty
        && !prompter.confirm(&Question::ContinueIntoNonEmpty(output_dir.clone()))
    {
        return Err(BatchError::Declined(output_dir));
    }

    notify(
        &progress,
        ProcessEvent::OutputReady {
            output_dir: output_dir.clone(),
            state,
        },
    );

    let config = JobConfig {
        input_dir: input.input_dir,
        output_dir,
        prefix: request.prefix.clone(),
        width: request.width,
        height: request.height,
    };
    info!(
        "resizing {} file(s) into {}",
        input.targets.len(),
        config.output_dir.display()
    );

    let outcomes = process::run_batch(backend, prompter, &config, &input.targets, progress);
    Ok(output::summarize(config.output_dir, outcomes))
}
