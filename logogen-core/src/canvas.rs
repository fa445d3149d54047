//! Padded-canvas composition
//!
//! Builds the background-filled canvases onto which a shrunk copy of the
//! source logo is centered (square icons and the social-preview image).

use crate::resize::fit_within;
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

/// Render an image centered on a background-filled canvas.
///
/// The source is shrunk (never enlarged) to fit within the canvas minus
/// `padding` on every side, then alpha-composited at the center. The
/// returned canvas is always exactly `width x height`.
pub fn pad_to_canvas(
    img: &DynamicImage,
    width: u32,
    height: u32,
    padding: u32,
    background: Rgba<u8>,
) -> RgbaImage {
    let inner_w = width.saturating_sub(padding * 2).max(1);
    let inner_h = height.saturating_sub(padding * 2).max(1);

    let fitted = fit_within(img, inner_w, inner_h).to_rgba8();

    let x = (width - fitted.width()) / 2;
    let y = (height - fitted.height()) / 2;

    debug!(
        width,
        height,
        padding,
        fitted_w = fitted.width(),
        fitted_h = fitted.height(),
        x,
        y,
        "Compositing onto padded canvas"
    );

    let mut canvas = RgbaImage::from_pixel(width, height, background);
    overlay(&mut canvas, &fitted, x, y);
    canvas
}

/// Overlay `top` onto `base` at the given position, blending by alpha.
///
/// All four channels are blended, so a translucent logo over a translucent
/// background keeps the mixed alpha.
fn overlay(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x >= base.width() || target_y >= base.height() {
            continue;
        }

        let alpha = pixel[3] as f32 / 255.0;
        if alpha > 0.99 {
            base.put_pixel(target_x, target_y, *pixel);
        } else if alpha > 0.01 {
            let bg = *base.get_pixel(target_x, target_y);
            base.put_pixel(target_x, target_y, blend_pixel(bg, *pixel, alpha));
        }
    }
}

fn blend_pixel(bg: Rgba<u8>, fg: Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (fg[0] as f32 * alpha + bg[0] as f32 * inv) as u8,
        (fg[1] as f32 * alpha + bg[1] as f32 * inv) as u8,
        (fg[2] as f32 * alpha + bg[2] as f32 * inv) as u8,
        (fg[3] as f32 * alpha + bg[3] as f32 * inv) as u8,
    ])
}
