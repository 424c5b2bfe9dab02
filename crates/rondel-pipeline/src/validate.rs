//! Badge validation: ordered checks with short-circuit semantics.
//!
//! The validator runs dimensions -> containment -> happiness in that
//! order and stops at the first failure. Each check is independently
//! callable; the composed entry points report the first failing
//! check's [`Rejection`].
//!
//! The containment scan is row-major (top row first, left to right
//! within a row), so the reported stray coordinate is deterministic.

use image::RgbaImage;

use crate::diagnostics::{Check, NullObserver, ScanObserver};
use crate::geometry::InscribedCircle;
use crate::types::{BadgeConfig, Rejection, Verdict};

/// Check that the image is exactly the configured square canvas.
#[must_use]
pub fn check_dimensions(image: &RgbaImage, config: &BadgeConfig) -> Verdict {
    let (width, height) = image.dimensions();
    let expected = config.canvas_edge;
    if width == expected && height == expected {
        Verdict::Pass
    } else {
        Verdict::Fail(Rejection::WrongSize {
            width,
            height,
            expected,
        })
    }
}

/// Check that every content pixel lies inside the inscribed circle.
///
/// Scans row-major and stops at the first content pixel outside the
/// circle.
#[must_use]
pub fn check_containment(image: &RgbaImage, config: &BadgeConfig) -> Verdict {
    check_containment_observed(image, config, &mut NullObserver)
}

/// [`check_containment`] with an observer receiving one
/// [`containment_pixel`](ScanObserver::containment_pixel) event per
/// visited pixel. The scan still stops at the first offender.
#[must_use]
pub fn check_containment_observed(
    image: &RgbaImage,
    config: &BadgeConfig,
    observer: &mut dyn ScanObserver,
) -> Verdict {
    let circle = InscribedCircle::for_canvas(config.canvas_edge);
    for (x, y, pixel) in image.enumerate_pixels() {
        let content = config.alpha.is_content(pixel.0[3]);
        let inside = circle.contains(x, y);
        observer.containment_pixel(x, y, content, inside);
        if content && !inside {
            return Verdict::Fail(Rejection::StrayContent {
                x,
                y,
                distance: circle.distance_from_center(x, y),
                radius: circle.radius(),
            });
        }
    }
    Verdict::Pass
}

/// Check that happy pixels form a strict majority of content pixels.
///
/// The decision is exact integer arithmetic (`happy * 2 > content`),
/// so a ratio of exactly one half still fails. An image with no
/// content pixels fails with [`Rejection::FullyTransparent`].
#[must_use]
pub fn check_happiness(image: &RgbaImage, config: &BadgeConfig) -> Verdict {
    let mut content: u64 = 0;
    let mut happy: u64 = 0;
    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        if !config.alpha.is_content(a) {
            continue;
        }
        content += 1;
        if config.happiness.is_happy([r, g, b]) {
            happy += 1;
        }
    }
    if content == 0 {
        Verdict::Fail(Rejection::FullyTransparent)
    } else if happy * 2 > content {
        Verdict::Pass
    } else {
        Verdict::Fail(Rejection::Unhappy { happy, content })
    }
}

/// Run every check in order, stopping at the first failure.
#[must_use]
pub fn validate_image(image: &RgbaImage, config: &BadgeConfig) -> Verdict {
    validate_image_observed(image, config, &mut NullObserver)
}

/// [`validate_image`] with observer hooks for per-pixel scan events
/// and per-check outcomes.
#[must_use]
pub fn validate_image_observed(
    image: &RgbaImage,
    config: &BadgeConfig,
    observer: &mut dyn ScanObserver,
) -> Verdict {
    let verdict = check_dimensions(image, config);
    if let Some(fail) = settle(observer, Check::Dimensions, verdict) {
        return fail;
    }

    let verdict = check_containment_observed(image, config, observer);
    if let Some(fail) = settle(observer, Check::Containment, verdict) {
        return fail;
    }

    let verdict = check_happiness(image, config);
    if let Some(fail) = settle(observer, Check::Happiness, verdict) {
        return fail;
    }

    Verdict::Pass
}

/// Report a check's outcome to the observer; `Some` when the check
/// failed and validation should stop.
fn settle(observer: &mut dyn ScanObserver, check: Check, verdict: Verdict) -> Option<Verdict> {
    match verdict {
        Verdict::Pass => {
            observer.check_passed(check);
            None
        }
        Verdict::Fail(rejection) => {
            observer.check_failed(check, &rejection);
            Some(Verdict::Fail(rejection))
        }
    }
}

/// Decode raw bytes and run every check in order.
///
/// Undecodable input is itself a verdict
/// ([`Rejection::Undecodable`]), never a hard error.
#[must_use]
pub fn validate_bytes(bytes: &[u8], config: &BadgeConfig) -> Verdict {
    validate_bytes_observed(bytes, config, &mut NullObserver)
}

/// [`validate_bytes`] with observer hooks.
#[must_use]
pub fn validate_bytes_observed(
    bytes: &[u8],
    config: &BadgeConfig,
    observer: &mut dyn ScanObserver,
) -> Verdict {
    match crate::decode::decode_any(bytes) {
        Ok(image) => {
            observer.check_passed(Check::Decode);
            validate_image_observed(&image, config, observer)
        }
        Err(err) => {
            let rejection = Rejection::Undecodable(err.to_string());
            observer.check_failed(Check::Decode, &rejection);
            Verdict::Fail(rejection)
        }
    }
}
