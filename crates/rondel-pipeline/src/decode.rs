//! Image decoding and source-format gating.
//!
//! The validator accepts anything the codec can decode; the converter
//! additionally gates on the sniffed format, since badges are only
//! built from PNG, JPEG, and GIF sources.

use image::{ImageFormat, RgbaImage};

use crate::types::BadgeError;

/// Source formats badges can be built from.
pub const ACCEPTED_FORMATS: [ImageFormat; 3] =
    [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif];

/// Decode raw image bytes into RGBA pixels.
///
/// Accepts any format the codec recognizes. The validator uses this
/// entry point and reports its own verdict for undecodable input.
///
/// # Errors
///
/// Returns [`BadgeError::EmptyInput`] if `bytes` is empty, or
/// [`BadgeError::ImageDecode`] if the format is unrecognized or the
/// data is corrupt.
pub fn decode_any(bytes: &[u8]) -> Result<RgbaImage, BadgeError> {
    if bytes.is_empty() {
        return Err(BadgeError::EmptyInput);
    }
    let image = image::load_from_memory(bytes)?;
    Ok(image.to_rgba8())
}

/// Decode raw image bytes destined for badge conversion.
///
/// The format is sniffed from the byte signature first; recognized
/// formats outside [`ACCEPTED_FORMATS`] are rejected before any pixel
/// is decoded.
///
/// # Errors
///
/// Returns [`BadgeError::EmptyInput`] if `bytes` is empty,
/// [`BadgeError::UnsupportedFormat`] for recognized formats badges are
/// not built from, or [`BadgeError::ImageDecode`] if the signature is
/// unrecognized or the data is corrupt.
pub fn decode_badge_source(bytes: &[u8]) -> Result<RgbaImage, BadgeError> {
    if bytes.is_empty() {
        return Err(BadgeError::EmptyInput);
    }
    let format = image::guess_format(bytes)?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(BadgeError::UnsupportedFormat(format));
    }
    let image = image::load_from_memory_with_format(bytes, format)?;
    Ok(image.to_rgba8())
}
