//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between the job scheduler and the
//! pixel work. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use the
//! recording [`MockBackend`](tests::MockBackend).

use super::params::ResizeParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// `Sync` because jobs share one backend across rayon worker threads.
pub trait ImageBackend: Sync {
    /// Decode `source`, resize it per `params` and write the result to
    /// `params.output`.
    ///
    /// Implementations must not leave a partial file behind on failure.
    fn resize(&self, source: &[u8], params: &ResizeParams) -> Result<(), BackendError>;
}
