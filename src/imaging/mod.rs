//! Image resampling, pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` with content sniffing |
//! | **Resize** | Lanczos3 via `resize_exact` / `resize_to_fill` |
//! | **Encode** | `image::DynamicImage::write_to`, format from the output extension |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing a resize
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{ResizePlan, plan_resize};
pub use params::ResizeParams;
pub use rust_backend::RustBackend;
