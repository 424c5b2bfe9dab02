//! Validation diagnostics: scan observers and full-scan reports.
//!
//! The validator is side-effect free and stops at the first failure.
//! Callers that want visibility attach a [`ScanObserver`] to the
//! observed entry points, or run [`inspect_image`] for a
//! non-short-circuiting scan that gathers counts for every check and
//! formats them as a human-readable report.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::geometry::InscribedCircle;
use crate::types::{BadgeConfig, Rejection, Verdict};

/// Identifies one of the validator's ordered checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Check {
    /// Byte decoding (bytes entry points only).
    Decode,
    /// Exact square canvas size.
    Dimensions,
    /// Content confined to the inscribed circle.
    Containment,
    /// Strict happy majority among content pixels.
    Happiness,
}

impl Check {
    /// Human-readable name of this check.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Dimensions => "dimensions",
            Self::Containment => "containment",
            Self::Happiness => "happiness",
        }
    }
}

/// Observer hooks for validation scans.
///
/// Every hook has a no-op default, so implementors override only what
/// they need. Hooks fire synchronously from the scan loop.
pub trait ScanObserver {
    /// One event per pixel visited by the containment scan, in
    /// row-major order. `content` is the alpha classification,
    /// `inside` the circle membership.
    fn containment_pixel(&mut self, x: u32, y: u32, content: bool, inside: bool) {
        let _ = (x, y, content, inside);
    }

    /// A check passed.
    fn check_passed(&mut self, check: Check) {
        let _ = check;
    }

    /// A check failed with this rejection; validation stops after it.
    fn check_failed(&mut self, check: Check, rejection: &Rejection) {
        let _ = (check, rejection);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ScanObserver for NullObserver {}

/// Containment counts from a full scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainmentStats {
    /// Pixels classified as content by the alpha convention.
    pub content_pixels: u64,
    /// Content pixels outside the inscribed circle.
    pub stray_pixels: u64,
    /// Row-major coordinates of the first stray, if any.
    pub first_stray: Option<(u32, u32)>,
}

/// Happiness counts from a full scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HappinessStats {
    /// Pixels classified as content by the alpha convention.
    pub content_pixels: u64,
    /// Content pixels classified as happy.
    pub happy_pixels: u64,
    /// `happy_pixels / content_pixels`, or 0.0 with no content.
    pub happy_ratio: f64,
}

/// Everything a full validation scan learned about a candidate badge.
///
/// Unlike the short-circuiting validator, the scan behind this report
/// visits every pixel even after a failure, so the counts describe the
/// whole image. The verdict still reports the first failing check.
/// Stats are `None` when the dimension check failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Containment counts, present when the canvas size matched.
    pub containment: Option<ContainmentStats>,
    /// Happiness counts, present when the canvas size matched.
    pub happiness: Option<HappinessStats>,
    /// The verdict the short-circuiting validator would return.
    pub verdict: Verdict,
}

impl ValidationReport {
    /// Format the report as human-readable text.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Badge Validation Report\n{}", "=".repeat(60)));
        lines.push(format!("Image: {}x{}", self.width, self.height));

        if let Some(containment) = self.containment {
            lines.push(format!(
                "Containment: {} content pixels, {} stray{}",
                containment.content_pixels,
                containment.stray_pixels,
                containment
                    .first_stray
                    .map_or_else(String::new, |(x, y)| format!(" (first at ({x}, {y}))")),
            ));
        }

        if let Some(happiness) = self.happiness {
            lines.push(format!(
                "Happiness: {} of {} content pixels happy ({:.1}%)",
                happiness.happy_pixels,
                happiness.content_pixels,
                happiness.happy_ratio * 100.0,
            ));
        }

        match &self.verdict {
            Verdict::Pass => lines.push("Verdict: PASS".to_string()),
            Verdict::Fail(rejection) => lines.push(format!("Verdict: FAIL - {rejection}")),
        }

        lines.join("\n")
    }
}

/// Run a full, non-short-circuiting validation scan.
///
/// Every pixel is visited once; containment and happiness counts are
/// gathered in the same pass. The verdict matches what
/// [`validate_image`](crate::validate::validate_image) would return
/// for the same image and config.
#[must_use]
pub fn inspect_image(image: &RgbaImage, config: &BadgeConfig) -> ValidationReport {
    let (width, height) = image.dimensions();
    let expected = config.canvas_edge;

    if width != expected || height != expected {
        return ValidationReport {
            width,
            height,
            containment: None,
            happiness: None,
            verdict: Verdict::Fail(Rejection::WrongSize {
                width,
                height,
                expected,
            }),
        };
    }

    let circle = InscribedCircle::for_canvas(expected);
    let mut content: u64 = 0;
    let mut happy: u64 = 0;
    let mut strays: u64 = 0;
    let mut first_stray = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if !config.alpha.is_content(a) {
            continue;
        }
        content += 1;
        if !circle.contains(x, y) {
            strays += 1;
            if first_stray.is_none() {
                first_stray = Some((x, y));
            }
        }
        if config.happiness.is_happy([r, g, b]) {
            happy += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let happy_ratio = if content > 0 {
        happy as f64 / content as f64
    } else {
        0.0
    };

    // First failing check wins, matching the short-circuit order.
    let verdict = if let Some((x, y)) = first_stray {
        Verdict::Fail(Rejection::StrayContent {
            x,
            y,
            distance: circle.distance_from_center(x, y),
            radius: circle.radius(),
        })
    } else if content == 0 {
        Verdict::Fail(Rejection::FullyTransparent)
    } else if happy * 2 > content {
        Verdict::Pass
    } else {
        Verdict::Fail(Rejection::Unhappy { happy, content })
    };

    ValidationReport {
        width,
        height,
        containment: Some(ContainmentStats {
            content_pixels: content,
            stray_pixels: strays,
            first_stray,
        }),
        happiness: Some(HappinessStats {
            content_pixels: content,
            happy_pixels: happy,
            happy_ratio,
        }),
        verdict,
    }
}
