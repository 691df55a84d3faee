//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the job scheduler (which decides where each image goes)
//! and the [`backend`](super::backend) (which does the actual pixel work).

use std::path::PathBuf;

/// Parameters for a single resize.
///
/// A missing dimension is derived from the other one so the aspect ratio is
/// kept. With both missing the image is re-encoded at its original size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParams {
    pub output: PathBuf,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
