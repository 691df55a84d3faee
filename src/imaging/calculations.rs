//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// How a source image should be resampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePlan {
    /// No target dimensions: keep the source size.
    Original,
    /// Scale to exactly these dimensions (aspect already preserved).
    Scale { width: u32, height: u32 },
    /// Cover the box, then center-crop to it.
    Fill { width: u32, height: u32 },
}

/// Decide how to resize an image of `original` dimensions.
///
/// - width only: height follows the source aspect ratio
/// - height only: width follows the source aspect ratio
/// - both: the image covers the box and is center-cropped to it
/// - neither: [`ResizePlan::Original`]
///
/// Derived dimensions are rounded and never drop below 1px.
///
/// # Examples
/// ```
/// # use diet_image::imaging::{plan_resize, ResizePlan};
/// assert_eq!(
///     plan_resize((4000, 3000), Some(200), None),
///     ResizePlan::Scale { width: 200, height: 150 }
/// );
/// ```
pub fn plan_resize(original: (u32, u32), width: Option<u32>, height: Option<u32>) -> ResizePlan {
    let (orig_w, orig_h) = original;

    match (width, height) {
        (None, None) => ResizePlan::Original,
        (Some(w), Some(h)) => ResizePlan::Fill {
            width: w,
            height: h,
        },
        (Some(w), None) => ResizePlan::Scale {
            width: w,
            height: scale_edge(orig_h, w, orig_w),
        },
        (None, Some(h)) => ResizePlan::Scale {
            width: scale_edge(orig_w, h, orig_h),
            height: h,
        },
    }
}

/// `edge * target / reference`, rounded, at least 1.
fn scale_edge(edge: u32, target: u32, reference: u32) -> u32 {
    if reference == 0 {
        return target.max(1);
    }
    let scaled = (edge as f64 * target as f64 / reference as f64).round() as u32;
    scaled.max(1)
}
