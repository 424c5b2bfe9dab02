//! Badge conversion: stretch, mask, and recolor a source image.
//!
//! The converter never fails after decode. It stretches the source to
//! fill the canvas (ignoring aspect ratio), forces full transparency
//! outside the inscribed circle, and remaps every content pixel inside
//! to its nearest palette color while keeping the pixel's alpha.

use std::fmt;

use image::imageops;
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::geometry::InscribedCircle;
use crate::palette;
use crate::types::{BadgeConfig, BadgeError};

/// Resampling filter used when stretching a source onto the canvas.
///
/// Ordered from fastest (lowest quality) to slowest (highest quality).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    /// Nearest-neighbor: fastest, blocky artifacts.
    Nearest,
    /// Bilinear interpolation: fast, decent quality.
    Triangle,
    /// Bicubic (Catmull-Rom): moderate speed, good quality.
    CatmullRom,
    /// Gaussian: moderate speed, smooth output.
    Gaussian,
    /// Lanczos with 3 lobes: slowest, sharpest detail.
    Lanczos3,
}

impl Default for ResampleFilter {
    fn default() -> Self {
        Self::Triangle
    }
}

impl ResampleFilter {
    /// Convert to the `image` crate's filter type.
    const fn to_image_filter(self) -> imageops::FilterType {
        match self {
            Self::Nearest => imageops::FilterType::Nearest,
            Self::Triangle => imageops::FilterType::Triangle,
            Self::CatmullRom => imageops::FilterType::CatmullRom,
            Self::Gaussian => imageops::FilterType::Gaussian,
            Self::Lanczos3 => imageops::FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => f.write_str("Nearest"),
            Self::Triangle => f.write_str("Triangle"),
            Self::CatmullRom => f.write_str("CatmullRom"),
            Self::Gaussian => f.write_str("Gaussian"),
            Self::Lanczos3 => f.write_str("Lanczos3"),
        }
    }
}

/// Convert a decoded source image into a badge canvas.
///
/// Total: any decoded source produces a canvas. The result is a new
/// buffer; the source is never mutated. Encoding the canvas (always as
/// PNG, to keep per-pixel alpha) is the caller's concern.
#[must_use = "returns the converted badge canvas"]
pub fn convert_image(source: &RgbaImage, config: &BadgeConfig) -> RgbaImage {
    let edge = config.canvas_edge;
    let circle = InscribedCircle::for_canvas(edge);
    let stretched = imageops::resize(
        source,
        edge,
        edge,
        config.resample_filter.to_image_filter(),
    );

    RgbaImage::from_fn(edge, edge, |x, y| {
        if !circle.contains(x, y) {
            return Rgba([0, 0, 0, 0]);
        }
        let Rgba([r, g, b, a]) = *stretched.get_pixel(x, y);
        if config.alpha.is_content(a) {
            let [pr, pg, pb] = palette::nearest_palette_color([r, g, b]);
            Rgba([pr, pg, pb, a])
        } else {
            Rgba([r, g, b, a])
        }
    })
}

/// Decode raw source bytes and convert them into a badge canvas.
///
/// # Errors
///
/// Returns [`BadgeError::EmptyInput`] if `bytes` is empty,
/// [`BadgeError::UnsupportedFormat`] for recognized formats other than
/// PNG, JPEG, or GIF, or [`BadgeError::ImageDecode`] if the data
/// cannot be decoded.
pub fn convert_bytes(bytes: &[u8], config: &BadgeConfig) -> Result<RgbaImage, BadgeError> {
    let source = crate::decode::decode_badge_source(bytes)?;
    Ok(convert_image(&source, config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EDGE: u32 = 16;

    fn small_config() -> BadgeConfig {
        BadgeConfig {
            canvas_edge: EDGE,
            ..BadgeConfig::default()
        }
    }

    #[test]
    fn default_filter_is_triangle() {
        assert_eq!(ResampleFilter::default(), ResampleFilter::Triangle);
    }

    #[test]
    fn filter_display_names() {
        assert_eq!(ResampleFilter::Nearest.to_string(), "Nearest");
        assert_eq!(ResampleFilter::Triangle.to_string(), "Triangle");
        assert_eq!(ResampleFilter::CatmullRom.to_string(), "CatmullRom");
        assert_eq!(ResampleFilter::Gaussian.to_string(), "Gaussian");
        assert_eq!(ResampleFilter::Lanczos3.to_string(), "Lanczos3");
    }

    #[test]
    fn filter_serde_round_trip() {
        let json = serde_json::to_string(&ResampleFilter::Lanczos3).unwrap();
        let back: ResampleFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ResampleFilter::Lanczos3);
    }

    #[test]
    fn output_is_always_the_canvas_size() {
        let config = small_config();
        for (width, height) in [(1, 1), (10, 20), (100, 3), (EDGE, EDGE)] {
            let source = RgbaImage::from_pixel(width, height, Rgba([10, 10, 10, 255]));
            let badge = convert_image(&source, &config);
            assert_eq!(badge.dimensions(), (EDGE, EDGE));
        }
    }

    #[test]
    fn corners_outside_the_circle_become_fully_transparent() {
        let source = RgbaImage::from_pixel(8, 8, Rgba([10, 10, 10, 255]));
        let badge = convert_image(&source, &small_config());
        let circle = InscribedCircle::for_canvas(EDGE);
        for (x, y, pixel) in badge.enumerate_pixels() {
            if !circle.contains(x, y) {
                assert_eq!(pixel.0, [0, 0, 0, 0], "pixel at ({x}, {y})");
            }
        }
    }

    #[test]
    fn content_inside_the_circle_is_remapped_to_the_palette() {
        // Near-black remaps to light blue, the closest palette entry.
        let source = RgbaImage::from_pixel(8, 8, Rgba([10, 10, 10, 255]));
        let badge = convert_image(&source, &small_config());
        assert_eq!(badge.get_pixel(8, 8).0, [173, 216, 230, 255]);
    }

    #[test]
    fn content_keeps_its_alpha_after_remapping() {
        let source = RgbaImage::from_pixel(8, 8, Rgba([255, 182, 193, 200]));
        let badge = convert_image(&source, &small_config());
        assert_eq!(badge.get_pixel(8, 8).0, [255, 182, 193, 200]);
    }

    #[test]
    fn transparent_pixels_inside_the_circle_pass_through() {
        let source = RgbaImage::from_pixel(8, 8, Rgba([10, 10, 10, 0]));
        let badge = convert_image(&source, &small_config());
        assert_eq!(badge.get_pixel(8, 8).0, [10, 10, 10, 0]);
    }

    #[test]
    fn every_content_pixel_lands_exactly_on_the_palette() {
        let config = small_config();
        let source = RgbaImage::from_fn(20, 20, |x, y| {
            Rgba([
                u8::try_from((x * 13) % 256).unwrap(),
                u8::try_from((y * 7) % 256).unwrap(),
                u8::try_from((x + y) % 256).unwrap(),
                255,
            ])
        });
        let badge = convert_image(&source, &config);
        let circle = InscribedCircle::for_canvas(EDGE);
        for (x, y, pixel) in badge.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            if circle.contains(x, y) && config.alpha.is_content(a) {
                assert!(
                    crate::palette::HAPPY_PALETTE.contains(&[r, g, b]),
                    "off-palette content at ({x}, {y}): {:?}",
                    [r, g, b]
                );
            }
        }
    }

    #[test]
    fn converted_badge_passes_validation() {
        let config = small_config();
        let source = RgbaImage::from_fn(24, 8, |x, y| {
            Rgba([
                u8::try_from((x * 10) % 256).unwrap(),
                u8::try_from((y * 30) % 256).unwrap(),
                96,
                255,
            ])
        });
        let badge = convert_image(&source, &config);
        let verdict = crate::validate::validate_image(&badge, &config);
        assert!(verdict.is_pass(), "verdict: {verdict:?}");
    }

    #[test]
    fn convert_bytes_rejects_empty_input() {
        assert!(matches!(
            convert_bytes(&[], &small_config()),
            Err(BadgeError::EmptyInput)
        ));
    }
}
