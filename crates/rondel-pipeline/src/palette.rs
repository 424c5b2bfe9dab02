//! The happy palette: classification and nearest-color lookup.
//!
//! Ten warm pastel colors define what "happy" means for badge content.
//! Validation uses a per-channel box distance with a strict tolerance;
//! the converter's recolor pass instead picks the palette entry with
//! the smallest Euclidean RGB distance.

use serde::{Deserialize, Serialize};

/// The ten colors a happy badge is built from.
pub const HAPPY_PALETTE: [[u8; 3]; 10] = [
    [255, 223, 186], // peach
    [255, 255, 153], // light yellow
    [255, 182, 193], // light pink
    [255, 192, 203], // pink
    [240, 230, 140], // khaki
    [255, 250, 205], // lemon chiffon
    [250, 250, 210], // light goldenrod
    [173, 216, 230], // light blue
    [255, 239, 213], // papaya whip
    [255, 228, 225], // misty rose
];

/// True when `rgb` lies within `tolerance` of some palette entry on
/// every channel. The comparison is strict, so a tolerance of 0
/// matches nothing, not even exact palette colors.
#[must_use]
pub fn matches_palette(rgb: [u8; 3], tolerance: u8) -> bool {
    HAPPY_PALETTE
        .iter()
        .any(|entry| within_box(rgb, *entry, tolerance))
}

/// Per-channel box distance test with a strict bound.
fn within_box(rgb: [u8; 3], entry: [u8; 3], tolerance: u8) -> bool {
    rgb[0].abs_diff(entry[0]) < tolerance
        && rgb[1].abs_diff(entry[1]) < tolerance
        && rgb[2].abs_diff(entry[2]) < tolerance
}

/// The palette entry closest to `rgb` by Euclidean RGB distance.
///
/// Ties resolve to the earlier entry in [`HAPPY_PALETTE`] declaration
/// order.
#[must_use]
pub fn nearest_palette_color(rgb: [u8; 3]) -> [u8; 3] {
    let mut closest = HAPPY_PALETTE[0];
    let mut closest_distance = u32::MAX;
    for entry in HAPPY_PALETTE {
        let distance = distance_squared(rgb, entry);
        if distance < closest_distance {
            closest = entry;
            closest_distance = distance;
        }
    }
    closest
}

/// Squared Euclidean distance between two RGB triples.
///
/// Avoids the square root for comparison purposes.
fn distance_squared(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = u32::from(a[0].abs_diff(b[0]));
    let dg = u32::from(a[1].abs_diff(b[1]));
    let db = u32::from(a[2].abs_diff(b[2]));
    dr * dr + dg * dg + db * db
}

/// Selects how content pixels are classified as happy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HappinessModel {
    /// Per-channel box distance to the happy palette.
    PaletteProximity {
        /// Strict per-channel tolerance.
        tolerance: u8,
    },
    /// HSV thresholds: bright, saturated colors count as happy
    /// regardless of the palette.
    Vibrance {
        /// Minimum HSV value (brightness), exclusive, in `0.0..=1.0`.
        min_value: f64,
        /// Minimum HSV saturation, exclusive, in `0.0..=1.0`.
        min_saturation: f64,
    },
}

impl Default for HappinessModel {
    fn default() -> Self {
        Self::PaletteProximity {
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

impl HappinessModel {
    /// Canonical per-channel palette tolerance.
    pub const DEFAULT_TOLERANCE: u8 = 30;

    /// Default brightness floor for [`Vibrance`](Self::Vibrance).
    pub const DEFAULT_MIN_VALUE: f64 = 0.6;

    /// Default saturation floor for [`Vibrance`](Self::Vibrance).
    pub const DEFAULT_MIN_SATURATION: f64 = 0.4;

    /// Classify an RGB triple under this model.
    #[must_use]
    pub fn is_happy(self, rgb: [u8; 3]) -> bool {
        match self {
            Self::PaletteProximity { tolerance } => matches_palette(rgb, tolerance),
            Self::Vibrance {
                min_value,
                min_saturation,
            } => {
                let (saturation, value) = saturation_value(rgb);
                value > min_value && saturation > min_saturation
            }
        }
    }
}

/// HSV saturation and value of an RGB triple, both in `0.0..=1.0`.
///
/// Hue is never needed for classification and is not computed.
fn saturation_value(rgb: [u8; 3]) -> (f64, f64) {
    let r = f64::from(rgb[0]) / 255.0;
    let g = f64::from(rgb[1]) / 255.0;
    let b = f64::from(rgb[2]) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let saturation = if max > 0.0 { (max - min) / max } else { 0.0 };
    (saturation, max)
}
