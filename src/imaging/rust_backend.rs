//! Pure Rust image processing backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, GIF, BMP, TIFF, WebP) | `image` crate, format sniffed from content |
//! | Resize | `image::imageops` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality 80) |
//! | Encode → others | `DynamicImage::write_to` |
//!
//! The encoder follows the output file extension. A destination without a
//! recognised extension (`IMG_0001`, `scan.raw`) keeps the source's format.
//!
//! AVIF is not handled: the `image` crate can only decode it through a C
//! library, so AVIF sources fail their job with a decode error.
//!
//! The output is encoded into memory first and written in one go, so a failed
//! encode never leaves a truncated file at the destination.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{ResizePlan, plan_resize};
use super::params::ResizeParams;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// `image` would otherwise encode at 75.
const JPEG_QUALITY: u8 = 80;

/// Pure Rust backend using the `image` crate ecosystem.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an image from memory, guessing the format from its magic bytes.
///
/// Returns the sniffed format alongside the pixels.
fn decode(source: &[u8]) -> Result<(DynamicImage, Option<ImageFormat>), BackendError> {
    let reader = ImageReader::new(Cursor::new(source))
        .with_guessed_format()
        .map_err(BackendError::Io)?;
    let format = reader.format();
    let img = reader
        .decode()
        .map_err(|e| BackendError::ProcessingFailed(format!("Failed to decode image: {}", e)))?;
    Ok((img, format))
}

/// Pick the encoder from the destination's extension, or the source's
/// format when the extension says nothing.
fn output_format(path: &Path, source: Option<ImageFormat>) -> Result<ImageFormat, BackendError> {
    let format = ImageFormat::from_path(path)
        .ok()
        .or(source)
        .ok_or_else(|| {
            BackendError::ProcessingFailed(format!(
                "Unsupported output format: {}",
                path.display()
            ))
        })?;
    if !format.writing_enabled() {
        return Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {:?}",
            format
        )));
    }
    Ok(format)
}

fn apply_plan(img: DynamicImage, plan: ResizePlan) -> DynamicImage {
    match plan {
        ResizePlan::Original => img,
        ResizePlan::Scale { width, height } => img.resize_exact(width, height, FilterType::Lanczos3),
        ResizePlan::Fill { width, height } => img.resize_to_fill(width, height, FilterType::Lanczos3),
    }
}

/// Encode into memory.
fn encode(img: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, BackendError> {
    let mut buffer = Cursor::new(Vec::new());
    let result = if format == ImageFormat::Jpeg {
        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY))
    } else {
        img.write_to(&mut buffer, format)
    };
    result.map_err(|e| {
        BackendError::ProcessingFailed(format!("{:?} encode failed: {}", format, e))
    })?;
    Ok(buffer.into_inner())
}

impl ImageBackend for RustBackend {
    fn resize(&self, source: &[u8], params: &ResizeParams) -> Result<(), BackendError> {
        let (img, source_format) = decode(source)?;
        let format = output_format(&params.output, source_format)?;
        let plan = plan_resize((img.width(), img.height()), params.width, params.height);
        let resized = apply_plan(img, plan);
        let bytes = encode(&resized, format)?;
        std::fs::write(&params.output, bytes)?;
        Ok(())
    }
}
