//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! ❕ Resizing images in folder /home/me/photos to width 200px
//!
//! ✅ 001 a.jpg
//! ⏭️ 002 b.png (kept existing file)
//! 🛑 003 c.jpg
//!     Could not resize c.jpg: Processing failed: Failed to decode image: ...
//!
//! 1 images are created. Check below
//! -> /home/me/photos/min
//! 1 skipped, 1 failed
//! ```
//!
//! Job lines are numbered in completion order, which varies between runs.
//!
//! # Architecture
//!
//! Everything here works on structured results ([`JobOutcome`],
//! [`BatchResult`], [`ProcessEvent`]); the job scheduler never formats text.
//! `format_*` functions return lines and are pure, `print_*` wrappers write
//! them to stdout. Errors go to stderr via [`print_error`].

use crate::confirm::Question;
use crate::process::ProcessEvent;
use crate::types::{BatchResult, DirState, JobOutcome, JobStatus, PathClassification};
use colored::Colorize;
use std::path::{Path, PathBuf};

// ============================================================================
// Aggregation
// ============================================================================

/// Fold settled job outcomes into the batch result.
pub fn summarize(output_dir: PathBuf, outcomes: Vec<JobOutcome>) -> BatchResult {
    let success_count = outcomes
        .iter()
        .filter(|o| o.status == JobStatus::Succeeded)
        .count();
    BatchResult {
        output_dir,
        success_count,
        total: outcomes.len(),
        outcomes,
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `width 200px`, `height 100px`, `width 200px and height 100px`, or `None`.
fn size_label(width: Option<u32>, height: Option<u32>) -> Option<String> {
    match (width, height) {
        (Some(w), Some(h)) => Some(format!(
            "{} and {}",
            format!("width {}px", w).bright_blue(),
            format!("height {}px", h).yellow()
        )),
        (Some(w), None) => Some(format!("width {}px", w).bright_blue().to_string()),
        (None, Some(h)) => Some(format!("height {}px", h).yellow().to_string()),
        (None, None) => None,
    }
}

// ============================================================================
// Prompts
// ============================================================================

pub fn format_prompt(question: &Question) -> String {
    match question {
        Question::Overwrite(output_name) => format!(
            "{} already exists. Would you like to overwrite?",
            output_name.bright_red()
        ),
        Question::ContinueIntoNonEmpty(output_dir) => format!(
            "{} is not empty. Would you like to continue?",
            output_dir.display().to_string().bright_red()
        ),
    }
}

// ============================================================================
// Progress
// ============================================================================

/// Intro line shown once the input is resolved.
pub fn format_intro(
    input: &Path,
    classification: PathClassification,
    target_count: usize,
    width: Option<u32>,
    height: Option<u32>,
) -> String {
    let path = input.display().to_string().green();
    let subject = match classification {
        PathClassification::Directory => {
            format!("{} images in folder {}", target_count, path)
        }
        _ => path.to_string(),
    };
    match size_label(width, height) {
        Some(size) => format!("\u{2755} Resizing {} to {}", subject, size),
        None => format!("\u{2755} Re-encoding {} at original size", subject),
    }
}

/// Status line(s) for one settled job. `index` is the 1-based settle order.
pub fn format_job_line(index: usize, outcome: &JobOutcome) -> Vec<String> {
    let position = format_index(index).bold();
    let name = outcome.filename.dimmed();
    match outcome.status {
        JobStatus::Succeeded => vec![format!("\u{2705} {} {}", position, name)],
        JobStatus::Skipped => vec![format!(
            "\u{23ed}\u{fe0f} {} {} (kept existing file)",
            position, name
        )],
        JobStatus::Failed => {
            let reason = outcome.error.as_deref().unwrap_or("unknown error");
            vec![
                format!("\u{1f6d1} {} {}", position, name),
                format!("    Could not resize {}: {}", outcome.filename, reason),
            ]
        }
    }
}

/// Turns [`ProcessEvent`]s into display lines, numbering jobs as they settle.
#[derive(Debug, Default)]
pub struct ProgressFormatter {
    settled: usize,
}

impl ProgressFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&mut self, event: &ProcessEvent) -> Vec<String> {
        match event {
            ProcessEvent::Started {
                input,
                classification,
                target_count,
                width,
                height,
            } => vec![
                format_intro(input, *classification, *target_count, *width, *height),
                String::new(),
            ],
            ProcessEvent::OutputReady { output_dir, state } => match state {
                DirState::Created => vec![format!("Created {}", output_dir.display())],
                DirState::Empty | DirState::NonEmpty => Vec::new(),
            },
            ProcessEvent::JobSettled(outcome) => {
                self.settled += 1;
                format_job_line(self.settled, outcome)
            }
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Final summary: created count, output directory, and skip/fail tally.
pub fn format_summary(result: &BatchResult) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "{} images are created. Check below",
            result.success_count.to_string().green()
        ),
        format!(
            "-> {}",
            result.output_dir.display().to_string().bright_green()
        ),
    ];

    let skipped = result.count(JobStatus::Skipped);
    let failed = result.count(JobStatus::Failed);
    if skipped > 0 || failed > 0 {
        lines.push(format!("{} skipped, {} failed", skipped, failed));
    }
    lines
}

/// Print the summary to stdout.
pub fn print_summary(result: &BatchResult) {
    for line in format_summary(result) {
        println!("{}", line);
    }
}

/// Print a diagnostic to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

// ============================================================================
// Tests
// ============================================================================
