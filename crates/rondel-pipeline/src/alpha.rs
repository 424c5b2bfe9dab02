//! Alpha conventions: deciding which pixels carry visible content.
//!
//! Badge alpha is defined on a legacy 7-bit inverted scale where 0 is
//! opaque and 127 is fully transparent. 8-bit samples are folded onto
//! that scale before the threshold test, so a pixel is content exactly
//! when its folded alpha falls below the transparency threshold.
//! [`AlphaConvention::EightBit`] is available for callers that want
//! conventional straight-alpha semantics instead.

use serde::{Deserialize, Serialize};

/// How the alpha channel separates content pixels from transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlphaConvention {
    /// Legacy 7-bit inverted scale (0 = opaque, 127 = fully
    /// transparent). An 8-bit sample `a` folds to `127 - (a >> 1)` and
    /// counts as content when the folded value is below `threshold`.
    SevenBitInverted {
        /// Folded alpha values strictly below this are content. The
        /// canonical contract uses 127: everything except full
        /// transparency.
        threshold: u8,
    },
    /// Conventional 8-bit straight alpha.
    EightBit {
        /// Alpha samples at or above this are content.
        threshold: u8,
    },
}

impl Default for AlphaConvention {
    fn default() -> Self {
        Self::SevenBitInverted {
            threshold: Self::DEFAULT_SEVEN_BIT_THRESHOLD,
        }
    }
}

impl AlphaConvention {
    /// Canonical transparency threshold on the folded 7-bit scale.
    pub const DEFAULT_SEVEN_BIT_THRESHOLD: u8 = 127;

    /// Threshold under [`EightBit`](Self::EightBit) where any non-zero
    /// alpha is content.
    pub const DEFAULT_EIGHT_BIT_THRESHOLD: u8 = 1;

    /// Fold an 8-bit alpha sample onto the legacy 7-bit scale.
    ///
    /// Maps 255 (opaque) to 0, and both 1 and 0 to 127 (fully
    /// transparent).
    #[must_use]
    pub const fn fold_to_seven_bit(alpha: u8) -> u8 {
        127 - (alpha >> 1)
    }

    /// Whether a pixel with this 8-bit alpha sample carries visible
    /// content.
    #[must_use]
    pub const fn is_content(self, alpha: u8) -> bool {
        match self {
            Self::SevenBitInverted { threshold } => Self::fold_to_seven_bit(alpha) < threshold,
            Self::EightBit { threshold } => alpha >= threshold,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fold_endpoints() {
        assert_eq!(AlphaConvention::fold_to_seven_bit(255), 0);
        assert_eq!(AlphaConvention::fold_to_seven_bit(128), 63);
        assert_eq!(AlphaConvention::fold_to_seven_bit(127), 64);
        assert_eq!(AlphaConvention::fold_to_seven_bit(2), 126);
        assert_eq!(AlphaConvention::fold_to_seven_bit(1), 127);
        assert_eq!(AlphaConvention::fold_to_seven_bit(0), 127);
    }

    #[test]
    fn default_is_legacy_seven_bit() {
        assert_eq!(
            AlphaConvention::default(),
            AlphaConvention::SevenBitInverted { threshold: 127 }
        );
    }

    #[test]
    fn seven_bit_treats_near_zero_alpha_as_content() {
        let convention = AlphaConvention::default();
        assert!(convention.is_content(255));
        assert!(convention.is_content(128));
        // 2 is the smallest 8-bit sample that folds below 127.
        assert!(convention.is_content(2));
        assert!(!convention.is_content(1));
        assert!(!convention.is_content(0));
    }

    #[test]
    fn seven_bit_custom_threshold_narrows_content() {
        let convention = AlphaConvention::SevenBitInverted { threshold: 64 };
        // Folded 63 passes a threshold of 64, folded 64 does not.
        assert!(convention.is_content(128));
        assert!(!convention.is_content(127));
    }

    #[test]
    fn eight_bit_threshold_is_inclusive() {
        let convention = AlphaConvention::EightBit {
            threshold: AlphaConvention::DEFAULT_EIGHT_BIT_THRESHOLD,
        };
        assert!(convention.is_content(255));
        assert!(convention.is_content(1));
        assert!(!convention.is_content(0));
    }

    #[test]
    fn conventions_disagree_on_faint_alpha() {
        // Alpha 1 folds to 127: transparent on the legacy scale but
        // content under straight alpha.
        let legacy = AlphaConvention::default();
        let straight = AlphaConvention::EightBit { threshold: 1 };
        assert!(!legacy.is_content(1));
        assert!(straight.is_content(1));
    }

    #[test]
    fn serde_round_trip() {
        let convention = AlphaConvention::EightBit { threshold: 8 };
        let json = serde_json::to_string(&convention).unwrap();
        let back: AlphaConvention = serde_json::from_str(&json).unwrap();
        assert_eq!(back, convention);
    }
}
