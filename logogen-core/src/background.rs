//! Background-color sampling

use image::imageops::FilterType;
use image::{DynamicImage, Rgba};
use tracing::debug;

/// Samples the canvas background color from a source image.
///
/// Downscales the whole image to a single pixel with an area-averaging
/// filter and reads that pixel, so the result is the average color of the
/// source rather than any one corner of it. Deterministic for a given
/// input.
pub fn sample_background(img: &DynamicImage) -> Rgba<u8> {
    let pixel = *img
        .resize_exact(1, 1, FilterType::Triangle)
        .to_rgba8()
        .get_pixel(0, 0);

    debug!(
        r = pixel[0],
        g = pixel[1],
        b = pixel[2],
        a = pixel[3],
        "Sampled background color"
    );

    pixel
}
