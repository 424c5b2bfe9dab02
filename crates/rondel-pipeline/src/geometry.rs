//! Inscribed-circle geometry for the badge canvas.
//!
//! The badge circle is derived from the canvas edge: centered at
//! `(edge / 2, edge / 2)` with radius `edge / 2`. Membership tests use
//! exact integer arithmetic on squared distances, so boundary pixels
//! classify identically on every platform.

/// The circle inscribed in a square badge canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InscribedCircle {
    center_x: u32,
    center_y: u32,
    radius: u32,
}

impl InscribedCircle {
    /// Derive the inscribed circle for a square canvas with the given
    /// edge length in pixels.
    #[must_use]
    pub const fn for_canvas(edge: u32) -> Self {
        let half = edge / 2;
        Self {
            center_x: half,
            center_y: half,
            radius: half,
        }
    }

    /// Circle radius in pixels.
    #[must_use]
    pub const fn radius(self) -> u32 {
        self.radius
    }

    /// Whether the pixel coordinate lies inside the circle.
    ///
    /// Pixels exactly on the boundary count as inside; the comparison
    /// is non-strict.
    #[must_use]
    pub fn contains(self, x: u32, y: u32) -> bool {
        let dx = i64::from(x) - i64::from(self.center_x);
        let dy = i64::from(y) - i64::from(self.center_y);
        let radius = i64::from(self.radius);
        dx * dx + dy * dy <= radius * radius
    }

    /// Euclidean distance from the pixel coordinate to the circle
    /// center. Used in failure messages; membership tests go through
    /// [`contains`](Self::contains) instead.
    #[must_use]
    pub fn distance_from_center(self, x: u32, y: u32) -> f64 {
        let dx = f64::from(x) - f64::from(self.center_x);
        let dy = f64::from(y) - f64::from(self.center_y);
        dx.mul_add(dx, dy * dy).sqrt()
    }
}
