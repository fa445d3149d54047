//! Aspect-ratio-preserving resize operations
//!
//! Uses Lanczos3 filtering for high-quality downsampling.

use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

/// Resize an image to an exact target width while maintaining aspect ratio.
///
/// The height is `round(width * src_h / src_w)`, clamped to at least 1.
/// Returns the image unchanged if it is already at the target width.
pub fn scale_to_width(img: &DynamicImage, width: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_w == width {
        debug!(width, "Image already at target width, skipping resize");
        return img.clone();
    }

    let ratio = f64::from(width) / f64::from(orig_w);
    let new_height = (f64::from(orig_h) * ratio).round() as u32;
    let new_height = new_height.max(1);

    debug!(
        orig_w,
        orig_h,
        new_width = width,
        new_height,
        "Scaling image to target width"
    );

    img.resize_exact(width, new_height, FilterType::Lanczos3)
}

/// Shrink an image to fit within a bounding box, preserving aspect ratio.
///
/// Never enlarges: an image already inside the box is returned unchanged.
pub fn fit_within(img: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if orig_w <= max_width && orig_h <= max_height {
        debug!(orig_w, orig_h, max_width, max_height, "Image already fits");
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        max_width,
        max_height,
        "Shrinking image to fit bounding box"
    );

    img.resize(max_width, max_height, FilterType::Lanczos3)
}
