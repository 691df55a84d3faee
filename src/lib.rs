//! # diet-image
//!
//! Batch-resize a single image or a folder of images from the command line.
//!
//! ```text
//! diet-image photos/ --width 200
//!
//! photos/                 photos/min/
//! ├── a.jpg        →      ├── a.jpg    (200px wide)
//! ├── b.png        →      └── b.png    (200px wide)
//! ├── .thumbs             (hidden files are ignored)
//! └── min/                (subfolders are ignored)
//! ```
//!
//! # Architecture
//!
//! One batch runs four steps, in order:
//!
//! ```text
//! 1. Resolve   input path  →  file | folder, list of filenames
//! 2. Plan      input dir   →  output dir (created, checked for leftovers)
//! 3. Process   filenames   →  one job per file, run in parallel
//! 4. Report    outcomes    →  "N images are created" + output path
//! ```
//!
//! Steps 1 and 2 can stop the batch (missing input, unwritable output, user
//! says no). Once step 3 starts, every file gets its own outcome
//! (succeeded, skipped, failed) and one failure never stops the others.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`batch`] | Orchestrates one run, decides what ends a batch early |
//! | [`resolve`] | Classifies the input path and lists target files |
//! | [`plan`] | Derives and creates the output directory |
//! | [`process`] | Per-file jobs and the parallel fan-out |
//! | [`output`] | Aggregation and all user-facing text |
//! | [`confirm`] | Yes/no prompts, serialized across jobs |
//! | [`imaging`] | Decode → resize → encode with the `image` crate |
//! | [`types`] | Request, outcome and result types shared by the steps |

pub mod batch;
pub mod confirm;
pub mod imaging;
pub mod output;
pub mod plan;
pub mod process;
pub mod resolve;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
