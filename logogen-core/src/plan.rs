//! The fixed output plan
//!
//! Every run produces the same ordered set of assets: the primary logo at
//! a recommended width plus a high-density variant, three padded square
//! icons, and the social-preview image.

use crate::canvas::pad_to_canvas;
use crate::resize::scale_to_width;
use image::imageops::FilterType;
use image::{DynamicImage, Rgba};

/// Recommended width of the primary logo.
pub const LOGO_WIDTH: u32 = 240;

/// Square icon sizes as (side, padding) pairs.
pub const SQUARE_ICONS: &[(u32, u32)] = &[(32, 3), (180, 8), (192, 8)];

/// Social-preview (Open Graph) image dimensions and padding.
pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;
pub const OG_PADDING: u32 = 80;

/// One rendered output, ready to be written to disk.
#[derive(Debug)]
pub struct RenderedAsset {
    /// Output file name, e.g. `logo-32.png`
    pub name: String,
    /// Rendered pixels
    pub image: DynamicImage,
}

impl RenderedAsset {
    fn new(name: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// Renders the complete asset set from a source logo.
///
/// `background` fills the padded canvases; derive it with
/// [`crate::sample_background`]. Assets come back in generation order.
///
/// The `@2x` variant is produced by doubling the already-scaled primary
/// logo, so its dimensions are always exactly twice the primary's even
/// where independent rescaling would round differently.
pub fn render_assets(source: &DynamicImage, background: Rgba<u8>) -> Vec<RenderedAsset> {
    let mut assets = Vec::new();

    let logo = scale_to_width(source, LOGO_WIDTH);
    let logo_2x = logo.resize_exact(
        logo.width() * 2,
        logo.height() * 2,
        FilterType::Lanczos3,
    );
    assets.push(RenderedAsset::new("logo.png", logo));
    assets.push(RenderedAsset::new("logo@2x.png", logo_2x));

    for &(side, padding) in SQUARE_ICONS {
        let icon = pad_to_canvas(source, side, side, padding, background);
        assets.push(RenderedAsset::new(
            format!("logo-{side}.png"),
            DynamicImage::ImageRgba8(icon),
        ));
    }

    let og = pad_to_canvas(source, OG_WIDTH, OG_HEIGHT, OG_PADDING, background);
    assets.push(RenderedAsset::new(
        "og-image.png",
        DynamicImage::ImageRgba8(og),
    ));

    assets
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn source(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([40, 80, 160, 255]),
        ))
    }

    const BG: Rgba<u8> = Rgba([40, 80, 160, 255]);

    fn dimensions_of<'a>(assets: &'a [RenderedAsset], name: &str) -> (u32, u32) {
        let asset = assets
            .iter()
            .find(|a| a.name == name)
            .unwrap_or_else(|| panic!("missing asset {name}"));
        (asset.image.width(), asset.image.height())
    }

    #[test]
    fn renders_the_full_set_in_order() {
        let assets = render_assets(&source(1000, 500), BG);
        let names: Vec<&str> = assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "logo.png",
                "logo@2x.png",
                "logo-32.png",
                "logo-180.png",
                "logo-192.png",
                "og-image.png"
            ]
        );
    }

    #[test]
    fn wide_source_scenario_dimensions() {
        let assets = render_assets(&source(1000, 500), BG);

        assert_eq!(dimensions_of(&assets, "logo.png"), (240, 120));
        assert_eq!(dimensions_of(&assets, "logo@2x.png"), (480, 240));
        assert_eq!(dimensions_of(&assets, "logo-32.png"), (32, 32));
        assert_eq!(dimensions_of(&assets, "logo-180.png"), (180, 180));
        assert_eq!(dimensions_of(&assets, "logo-192.png"), (192, 192));
        assert_eq!(dimensions_of(&assets, "og-image.png"), (1200, 630));
    }

    #[test]
    fn retina_variant_is_exactly_double() {
        // 240 * 310 / 1000 rounds to 74; doubling the scaled logo keeps
        // the 2x variant at 148 rather than re-rounding to 149.
        let assets = render_assets(&source(1000, 310), BG);

        let (w, h) = dimensions_of(&assets, "logo.png");
        let (w2, h2) = dimensions_of(&assets, "logo@2x.png");
        assert_eq!((w2, h2), (w * 2, h * 2));
        assert_eq!((w, h), (240, 74));
        assert_eq!((w2, h2), (480, 148));
    }

    #[test]
    fn tall_source_still_fills_fixed_canvases() {
        let assets = render_assets(&source(300, 900), BG);

        assert_eq!(dimensions_of(&assets, "logo.png"), (240, 720));
        assert_eq!(dimensions_of(&assets, "logo-32.png"), (32, 32));
        assert_eq!(dimensions_of(&assets, "og-image.png"), (1200, 630));
    }
}
