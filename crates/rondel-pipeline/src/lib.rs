//! rondel-pipeline: badge image validation and conversion (sans-IO
//! core).
//!
//! A badge is a 512x512 image whose visible content sits inside the
//! inscribed circle and whose colors are drawn from a fixed palette of
//! ten happy pastels. [`verify`] checks a candidate image against that
//! contract, running dimensions -> containment -> happiness in order
//! and reporting the first failure as a [`Verdict`]. [`to_badge`]
//! converts an arbitrary PNG, JPEG, or GIF source into a conforming
//! badge canvas.
//!
//! This crate has **no I/O dependencies** -- it transforms byte slices
//! and pixel buffers. File handling and the CLI live in the `rondel`
//! binary crate.

pub mod alpha;
pub mod convert;
pub mod decode;
pub mod diagnostics;
pub mod geometry;
pub mod palette;
pub mod types;
pub mod validate;

pub use alpha::AlphaConvention;
pub use convert::ResampleFilter;
pub use diagnostics::{Check, NullObserver, ScanObserver, ValidationReport};
pub use palette::{HAPPY_PALETTE, HappinessModel};
pub use types::{BadgeConfig, BadgeError, Rejection, RgbaImage, Verdict};

/// Check a candidate badge image against the badge contract.
///
/// Checks run in order:
///
/// 1. decode: the bytes decode as an image
/// 2. dimensions: exactly the square canvas
/// 3. containment: content confined to the inscribed circle
/// 4. happiness: a strict happy majority among content pixels
///
/// Never returns an error: undecodable input is itself a failing
/// [`Verdict`].
#[must_use]
pub fn verify(image_bytes: &[u8], config: &BadgeConfig) -> Verdict {
    validate::validate_bytes(image_bytes, config)
}

/// Convert an arbitrary source image into a conforming badge canvas.
///
/// The source is stretched to fill the canvas, masked to the inscribed
/// circle, and recolored to the happy palette. The caller encodes the
/// returned canvas; PNG keeps the per-pixel alpha exact.
///
/// # Errors
///
/// Returns [`BadgeError::EmptyInput`] if `image_bytes` is empty,
/// [`BadgeError::UnsupportedFormat`] for sources that are not PNG,
/// JPEG, or GIF, or [`BadgeError::ImageDecode`] if decoding fails.
pub fn to_badge(image_bytes: &[u8], config: &BadgeConfig) -> Result<RgbaImage, BadgeError> {
    convert::convert_bytes(image_bytes, config)
}
