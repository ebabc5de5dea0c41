//! Geometry kit for graph rendering
//!
//! Stateless, pure functions for distances, circle/point math and
//! rectangle/rotation math. Every drawing routine in the renderer is built on
//! these primitives.
//!
//! # Coordinate convention
//!
//! The drawing surface has its y axis growing downward. Angles are measured
//! from the +x axis, so a positive angle turns clockwise on screen even though
//! the formulas are the standard counter-clockwise ones.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

/// Relative tolerance below which three points are treated as collinear
const COLLINEAR_EPSILON: f64 = 1e-9;

/// A 2D coordinate in the surface's local (pre-transform) space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`
    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Midpoint between `self` and `other`
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Direction angle from `self` toward `other`, in radians
    #[must_use]
    pub fn angle_to(self, other: Self) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Euclidean distance to `other`
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        distance(self.x, self.y, other.x, other.y)
    }

    /// True if both coordinates are finite
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`
///
/// # Example
///
/// ```
/// use forcegraph_core::geometry::distance;
///
/// assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
/// ```
#[must_use]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from the point `(x, y)` to the boundary of the circle at
/// `(cx, cy)` with radius `r`
#[must_use]
pub fn point_distance(cx: f64, cy: f64, r: f64, x: f64, y: f64) -> f64 {
    (distance(cx, cy, x, y) - r).abs()
}

/// True iff `(x, y)` lies inside or on the circle at `(cx, cy)` with radius `r`
#[must_use]
pub fn is_inside_circle(cx: f64, cy: f64, r: f64, x: f64, y: f64) -> bool {
    distance(cx, cy, x, y) <= r
}

/// True iff both coordinates are exactly equal
#[must_use]
pub fn is_same_point(a: Point, b: Point) -> bool {
    a.x == b.x && a.y == b.y
}

/// Circumcenter of the triangle `p1, p2, p3`
///
/// Solves the perpendicular-bisector linear system in closed form. When the
/// points are collinear the denominator is zero and the result has non-finite
/// coordinates; use [`checked_circle_center`] where that matters.
#[must_use]
pub fn circle_center_from_three_points(p1: Point, p2: Point, p3: Point) -> Point {
    let (a, b, c, d, denominator) = bisector_system(p1, p2, p3);
    let e = (p1.x * p1.x - p2.x * p2.x - p2.y * p2.y + p1.y * p1.y) / 2.0;
    let f = (p1.x * p1.x - p3.x * p3.x - p3.y * p3.y + p1.y * p1.y) / 2.0;
    Point::new(
        -(d * e - b * f) / denominator,
        -(a * f - c * e) / denominator,
    )
}

/// Circumcenter of `p1, p2, p3`, or `None` when the points are (nearly)
/// collinear or coincident
///
/// # Example
///
/// ```
/// use forcegraph_core::geometry::{checked_circle_center, Point};
///
/// let on_a_line = checked_circle_center(
///     Point::new(0.0, 0.0),
///     Point::new(50.0, 0.0),
///     Point::new(100.0, 0.0),
/// );
/// assert!(on_a_line.is_none());
/// ```
#[must_use]
pub fn checked_circle_center(p1: Point, p2: Point, p3: Point) -> Option<Point> {
    let (a, b, c, d, denominator) = bisector_system(p1, p2, p3);
    let scale = (a.abs() + b.abs()) * (c.abs() + d.abs());
    if scale == 0.0 || denominator.abs() <= COLLINEAR_EPSILON * scale {
        return None;
    }
    Some(circle_center_from_three_points(p1, p2, p3)).filter(|center| center.is_finite())
}

fn bisector_system(p1: Point, p2: Point, p3: Point) -> (f64, f64, f64, f64, f64) {
    let a = p1.x - p2.x;
    let b = p1.y - p2.y;
    let c = p1.x - p3.x;
    let d = p1.y - p3.y;
    (a, b, c, d, b * c - a * d)
}

/// Point on the circle at `(cx, cy)` with radius `r` at angle `a`
///
/// Angle 0 is the +x axis; positive angles turn clockwise on screen.
///
/// # Example
///
/// ```
/// use forcegraph_core::geometry::{circle_point_from_angle, Point};
///
/// assert_eq!(circle_point_from_angle(0.0, 0.0, 10.0, 0.0), Point::new(10.0, 0.0));
/// ```
#[must_use]
pub fn circle_point_from_angle(cx: f64, cy: f64, r: f64, a: f64) -> Point {
    Point::new(cx + a.cos() * r, cy + a.sin() * r)
}

/// Rotates `point` about `origin` by `radians`
#[must_use]
pub fn rotate_point(point: Point, origin: Point, radians: f64) -> Point {
    let px = point.x - origin.x;
    let py = point.y - origin.y;
    let (sin, cos) = radians.sin_cos();
    Point::new(
        px * cos - py * sin + origin.x,
        px * sin + py * cos + origin.y,
    )
}

/// Corners of the `width` x `height` rectangle centered at `center`
///
/// Order: `[top_left, top_right, bottom_right, bottom_left]`.
#[must_use]
pub fn rect_corners_from_center(center: Point, width: f64, height: f64) -> [Point; 4] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    [
        Point::new(center.x - hw, center.y - hh),
        Point::new(center.x + hw, center.y - hh),
        Point::new(center.x + hw, center.y + hh),
        Point::new(center.x - hw, center.y + hh),
    ]
}

/// [`rotate_point`] applied to every point, preserving order
#[must_use]
pub fn rotate_points(points: &[Point], origin: Point, radians: f64) -> Vec<Point> {
    points
        .iter()
        .map(|&point| rotate_point(point, origin, radians))
        .collect()
}

/// Maps an angle into `[0, 2π)`
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if normalized >= TAU { 0.0 } else { normalized }
}

/// Keeps text upright: angles in `(-90°, 90°)` pass through, anything else is
/// flipped by 180°
#[must_use]
pub fn readable_angle(angle: f64) -> f64 {
    if angle > -FRAC_PI_2 && angle < FRAC_PI_2 {
        angle
    } else if angle > 0.0 {
        angle - PI
    } else {
        angle + PI
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            a.distance_to(b) < EPSILON,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn test_distance_pythagorean() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(3.0, 4.0, 0.0, 0.0), 5.0);
        assert_eq!(distance(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_point_distance_inside_and_outside() {
        assert_eq!(point_distance(0.0, 0.0, 10.0, 15.0, 0.0), 5.0);
        assert_eq!(point_distance(0.0, 0.0, 10.0, 4.0, 0.0), 6.0);
        assert_eq!(point_distance(0.0, 0.0, 10.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_is_inside_circle_boundary_inclusive() {
        assert!(is_inside_circle(0.0, 0.0, 5.0, 3.0, 4.0));
        assert!(is_inside_circle(0.0, 0.0, 5.0, 0.0, 0.0));
        assert!(!is_inside_circle(0.0, 0.0, 5.0, 3.0, 4.1));
    }

    #[test]
    fn test_is_same_point() {
        assert!(is_same_point(Point::new(1.0, 2.0), Point::new(1.0, 2.0)));
        assert!(!is_same_point(Point::new(1.0, 2.0), Point::new(1.0, 2.5)));
    }

    #[test]
    fn test_circle_point_from_angle_axes() {
        assert_close(circle_point_from_angle(0.0, 0.0, 10.0, 0.0), Point::new(10.0, 0.0));
        assert_close(
            circle_point_from_angle(0.0, 0.0, 10.0, FRAC_PI_2),
            Point::new(0.0, 10.0),
        );
        assert_close(
            circle_point_from_angle(5.0, 5.0, 2.0, PI),
            Point::new(3.0, 5.0),
        );
    }

    #[test]
    fn test_circle_center_known_circle() {
        let center = Point::new(50.0, 52.5);
        let r = 72.5;
        let p1 = circle_point_from_angle(center.x, center.y, r, 0.3);
        let p2 = circle_point_from_angle(center.x, center.y, r, 2.0);
        let p3 = circle_point_from_angle(center.x, center.y, r, 4.1);

        let found = circle_center_from_three_points(p1, p2, p3);
        assert!(found.distance_to(center) < 1e-6);
        for p in [p1, p2, p3] {
            assert!((p.distance_to(found) - r).abs() < 1e-6);
        }
    }

    #[test]
    fn test_circle_center_collinear_is_non_finite() {
        let found = circle_center_from_three_points(
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!(!found.is_finite());
    }

    #[test]
    fn test_checked_circle_center_rejects_degenerate() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        assert!(checked_circle_center(a, b, Point::new(20.0, 20.0)).is_none());
        assert!(checked_circle_center(a, a, b).is_none());
        assert!(checked_circle_center(a, a, a).is_none());
        assert!(checked_circle_center(a, b, Point::new(20.0, 0.0)).is_some());
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        assert_close(
            rotate_point(Point::new(1.0, 0.0), Point::origin(), FRAC_PI_2),
            Point::new(0.0, 1.0),
        );
        assert_close(
            rotate_point(Point::new(2.0, 1.0), Point::new(1.0, 1.0), PI),
            Point::new(0.0, 1.0),
        );
    }

    #[test]
    fn test_rect_corners_order() {
        let corners = rect_corners_from_center(Point::new(10.0, 20.0), 4.0, 2.0);
        assert_eq!(corners[0], Point::new(8.0, 19.0));
        assert_eq!(corners[1], Point::new(12.0, 19.0));
        assert_eq!(corners[2], Point::new(12.0, 21.0));
        assert_eq!(corners[3], Point::new(8.0, 21.0));
    }

    #[test]
    fn test_rotate_points_preserves_order_and_empty() {
        assert!(rotate_points(&[], Point::origin(), 1.0).is_empty());

        let points = [Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let rotated = rotate_points(&points, Point::origin(), FRAC_PI_2);
        assert_eq!(rotated.len(), 2);
        assert_close(rotated[0], Point::new(0.0, 1.0));
        assert_close(rotated[1], Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPSILON);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < EPSILON);
        assert!(normalize_angle(-1e-20) < TAU);
    }

    #[test]
    fn test_readable_angle_never_upside_down() {
        assert_eq!(readable_angle(0.5), 0.5);
        assert_eq!(readable_angle(-0.5), -0.5);
        assert!((readable_angle(PI) - 0.0).abs() < EPSILON);
        assert!((readable_angle(-PI) - 0.0).abs() < EPSILON);
        assert!((readable_angle(FRAC_PI_2) + FRAC_PI_2).abs() < EPSILON);
        assert!((readable_angle(-FRAC_PI_2) - FRAC_PI_2).abs() < EPSILON);
        assert!((readable_angle(2.5) - (2.5 - PI)).abs() < EPSILON);
    }

    #[test]
    fn test_point_helpers() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        assert_eq!(a.midpoint(b), Point::new(50.0, 0.0));
        assert_eq!(a.angle_to(b), 0.0);
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
    }
}
