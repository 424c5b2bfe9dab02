//! Shared types for badge validation and conversion.

use serde::{Deserialize, Serialize};

use crate::alpha::AlphaConvention;
use crate::convert::ResampleFilter;
use crate::palette::HappinessModel;

/// Re-export `RgbaImage` so downstream crates can work with decoded
/// pixel data without depending on `image` directly.
pub use image::RgbaImage;

/// Configuration for badge validation and conversion.
///
/// The default is the canonical badge contract: a 512x512 canvas,
/// palette proximity at tolerance 30, and legacy 7-bit inverted alpha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeConfig {
    /// Edge length of the square badge canvas in pixels. The inscribed
    /// circle is centered at `(edge / 2, edge / 2)` with radius
    /// `edge / 2`.
    pub canvas_edge: u32,

    /// How content pixels are classified as happy.
    pub happiness: HappinessModel,

    /// How the alpha channel separates content from transparency.
    pub alpha: AlphaConvention,

    /// Resampling filter used when stretching a source image onto the
    /// badge canvas.
    pub resample_filter: ResampleFilter,
}

impl BadgeConfig {
    /// Canonical canvas edge in pixels.
    pub const DEFAULT_CANVAS_EDGE: u32 = 512;

    /// Canonical per-channel palette tolerance.
    pub const DEFAULT_TOLERANCE: u8 = HappinessModel::DEFAULT_TOLERANCE;

    /// Canonical transparency threshold on the folded 7-bit alpha
    /// scale.
    pub const DEFAULT_ALPHA_THRESHOLD: u8 = AlphaConvention::DEFAULT_SEVEN_BIT_THRESHOLD;

    /// Default resampling filter for conversion.
    pub const DEFAULT_RESAMPLE_FILTER: ResampleFilter = ResampleFilter::Triangle;
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            canvas_edge: Self::DEFAULT_CANVAS_EDGE,
            happiness: HappinessModel::default(),
            alpha: AlphaConvention::default(),
            resample_filter: Self::DEFAULT_RESAMPLE_FILTER,
        }
    }
}

/// Outcome of validating a candidate badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// The image satisfied every check.
    Pass,
    /// The image failed a check; later checks were not run.
    Fail(Rejection),
}

impl Verdict {
    /// `true` when the image satisfied every check.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The rejection carried by a failing verdict.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Pass => None,
            Self::Fail(rejection) => Some(rejection),
        }
    }
}

/// Why a candidate badge failed validation.
///
/// Carried inside [`Verdict::Fail`]. Every variant names the first
/// check that failed and the evidence for it.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum Rejection {
    /// The input bytes could not be decoded. The decoder's rendered
    /// message is carried as a string; `image::ImageError` implements
    /// neither serde nor `PartialEq`.
    #[error("{0}")]
    Undecodable(String),

    /// The image is not the exact square canvas.
    #[error("image is {width}x{height}, expected exactly {expected}x{expected}")]
    WrongSize {
        /// Actual width in pixels.
        width: u32,
        /// Actual height in pixels.
        height: u32,
        /// Required edge length.
        expected: u32,
    },

    /// A content pixel lies outside the inscribed circle. The reported
    /// coordinate is the first offender in row-major scan order.
    #[error("content pixel at ({x}, {y}) lies outside the badge circle (distance {distance:.1}, radius {radius})")]
    StrayContent {
        /// Horizontal coordinate of the offending pixel.
        x: u32,
        /// Vertical coordinate of the offending pixel.
        y: u32,
        /// Euclidean distance from the circle center.
        distance: f64,
        /// Circle radius in pixels.
        radius: u32,
    },

    /// Happy pixels did not form a strict majority of content pixels.
    #[error("only {happy} of {content} content pixels are happy")]
    Unhappy {
        /// Content pixels classified as happy.
        happy: u64,
        /// Total content pixels.
        content: u64,
    },

    /// The image has no content pixels at all.
    #[error("image is fully transparent")]
    FullyTransparent,
}

/// Hard errors from decoding and conversion.
///
/// Validation failures are not errors -- they are carried as
/// [`Rejection`] values inside [`Verdict::Fail`]. `BadgeError` covers
/// the converter path, where there is no partial result to return.
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input is a recognized format that badges are not built
    /// from.
    #[error("unsupported source format {}: badge sources must be PNG, JPEG, or GIF", .0.to_mime_type())]
    UnsupportedFormat(image::ImageFormat),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_canonical_contract() {
        let config = BadgeConfig::default();
        assert_eq!(config.canvas_edge, 512);
        assert_eq!(
            config.happiness,
            HappinessModel::PaletteProximity { tolerance: 30 }
        );
        assert_eq!(
            config.alpha,
            AlphaConvention::SevenBitInverted { threshold: 127 }
        );
        assert_eq!(config.resample_filter, ResampleFilter::Triangle);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = BadgeConfig {
            canvas_edge: 128,
            happiness: HappinessModel::Vibrance {
                min_value: 0.5,
                min_saturation: 0.3,
            },
            alpha: AlphaConvention::EightBit { threshold: 16 },
            resample_filter: ResampleFilter::Lanczos3,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: BadgeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn verdict_accessors() {
        let pass = Verdict::Pass;
        assert!(pass.is_pass());
        assert_eq!(pass.rejection(), None);

        let fail = Verdict::Fail(Rejection::FullyTransparent);
        assert!(!fail.is_pass());
        assert_eq!(fail.rejection(), Some(&Rejection::FullyTransparent));
    }

    #[test]
    fn verdict_serde_round_trip() {
        let verdict = Verdict::Fail(Rejection::WrongSize {
            width: 100,
            height: 200,
            expected: 512,
        });
        let json = serde_json::to_string(&verdict).unwrap();
        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verdict);
    }

    #[test]
    fn rejection_messages_name_the_evidence() {
        let wrong_size = Rejection::WrongSize {
            width: 100,
            height: 200,
            expected: 512,
        };
        assert_eq!(
            wrong_size.to_string(),
            "image is 100x200, expected exactly 512x512"
        );

        let stray = Rejection::StrayContent {
            x: 500,
            y: 10,
            distance: 345.67,
            radius: 256,
        };
        assert_eq!(
            stray.to_string(),
            "content pixel at (500, 10) lies outside the badge circle (distance 345.7, radius 256)"
        );

        let unhappy = Rejection::Unhappy {
            happy: 10,
            content: 30,
        };
        assert_eq!(unhappy.to_string(), "only 10 of 30 content pixels are happy");
    }

    #[test]
    fn undecodable_preserves_the_decoder_message() {
        let rejection = Rejection::Undecodable("input image data is empty".to_string());
        assert_eq!(rejection.to_string(), "input image data is empty");
    }

    #[test]
    fn unsupported_format_message_names_the_mime_type() {
        let err = BadgeError::UnsupportedFormat(image::ImageFormat::WebP);
        let message = err.to_string();
        assert!(message.contains("image/webp"), "message: {message}");
        assert!(message.contains("PNG, JPEG, or GIF"), "message: {message}");
    }
}
