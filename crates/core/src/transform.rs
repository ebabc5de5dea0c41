//! Pan/zoom transform applied before any drawing
//!
//! A [`Transform`] is an immutable value produced by the external pan/zoom
//! handler. The renderer applies it as translate-then-scale, so a world point
//! `p` lands on screen at `(x + k * p.x, y + k * p.y)`.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Pan offset `(x, y)` and uniform scale `k`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[must_use]
    pub const fn new(x: f64, y: f64, k: f64) -> Self {
        Self { x, y, k }
    }

    /// No pan, unit scale
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            k: 1.0,
        }
    }

    /// Current zoom level
    #[must_use]
    pub const fn zoom(&self) -> f64 {
        self.k
    }

    /// Same pan, different zoom level
    #[must_use]
    pub const fn with_zoom(self, k: f64) -> Self {
        Self { k, ..self }
    }

    /// Maps a world point to screen coordinates
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        Point::new(self.x + self.k * point.x, self.y + self.k * point.y)
    }

    /// Maps a screen point back to world coordinates
    ///
    /// Returns `None` if the scale is zero or not finite, since the transform
    /// cannot be inverted.
    ///
    /// # Example
    ///
    /// ```
    /// use forcegraph_core::geometry::Point;
    /// use forcegraph_core::transform::Transform;
    ///
    /// let t = Transform::new(100.0, 50.0, 2.0);
    /// let world = t.invert(Point::new(120.0, 70.0));
    /// assert_eq!(world, Some(Point::new(10.0, 10.0)));
    /// ```
    #[must_use]
    pub fn invert(&self, point: Point) -> Option<Point> {
        if self.k == 0.0 || !self.k.is_finite() {
            return None;
        }
        Some(Point::new(
            (point.x - self.x) / self.k,
            (point.y - self.y) / self.k,
        ))
    }
}
