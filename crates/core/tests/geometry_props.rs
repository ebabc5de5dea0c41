#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]
#![forbid(unsafe_code)]

use std::f64::consts::TAU;

use forcegraph_core::geometry::{
    checked_circle_center, circle_center_from_three_points, circle_point_from_angle, distance,
    normalize_angle, readable_angle, rect_corners_from_center, rotate_point, rotate_points, Point,
};
use proptest::prelude::*;

const EPSILON: f64 = 1e-6;

fn coord() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

proptest! {
    /// Three points sampled on a known circle recover its center and radius
    #[test]
    fn prop_circumcenter_recovers_circle(
        cx in coord(),
        cy in coord(),
        r in 5.0..500.0f64,
        a1 in 0.0..TAU,
        gap1 in 0.3..2.0f64,
        gap2 in 0.3..2.0f64,
    ) {
        let p1 = circle_point_from_angle(cx, cy, r, a1);
        let p2 = circle_point_from_angle(cx, cy, r, a1 + gap1);
        let p3 = circle_point_from_angle(cx, cy, r, a1 + gap1 + gap2);

        let center = circle_center_from_three_points(p1, p2, p3);
        let tolerance = EPSILON * r.max(1.0) * 10.0;
        prop_assert!(center.distance_to(Point::new(cx, cy)) < tolerance);
        for p in [p1, p2, p3] {
            prop_assert!((p.distance_to(center) - r).abs() < tolerance);
        }

        let checked = checked_circle_center(p1, p2, p3);
        prop_assert!(checked.is_some());
    }

    /// Points on a common line never produce a checked center
    #[test]
    fn prop_collinear_has_no_checked_center(
        x in coord(),
        y in coord(),
        dx in 1.0..100.0f64,
        dy in -100.0..100.0f64,
        t in 0.1..0.9f64,
    ) {
        let p1 = Point::new(x, y);
        let p3 = Point::new(x + dx, y + dy);
        let p2 = Point::new(x + dx * t, y + dy * t);
        prop_assert!(checked_circle_center(p1, p2, p3).is_none());
    }

    /// Rotation preserves the distance to the rotation origin
    #[test]
    fn prop_rotation_preserves_radius(
        px in coord(),
        py in coord(),
        ox in coord(),
        oy in coord(),
        radians in -TAU..TAU,
    ) {
        let p = Point::new(px, py);
        let origin = Point::new(ox, oy);
        let rotated = rotate_point(p, origin, radians);
        prop_assert!((rotated.distance_to(origin) - p.distance_to(origin)).abs() < EPSILON);
    }

    /// Rotating corners keeps them centered on the rotation origin
    #[test]
    fn prop_rotated_rect_keeps_center(
        cx in coord(),
        cy in coord(),
        w in 0.0..200.0f64,
        h in 0.0..200.0f64,
        radians in -TAU..TAU,
    ) {
        let center = Point::new(cx, cy);
        let corners = rotate_points(&rect_corners_from_center(center, w, h), center, radians);
        prop_assert_eq!(corners.len(), 4);
        let sum_x: f64 = corners.iter().map(|p| p.x).sum();
        let sum_y: f64 = corners.iter().map(|p| p.y).sum();
        prop_assert!((sum_x / 4.0 - cx).abs() < EPSILON);
        prop_assert!((sum_y / 4.0 - cy).abs() < EPSILON);
        // Opposite corners stay one diagonal apart
        prop_assert!((corners[0].distance_to(corners[2]) - w.hypot(h)).abs() < EPSILON);
    }

    /// Normalized angles land in [0, 2π) and point the same way
    #[test]
    fn prop_normalize_angle_range(angle in -100.0..100.0f64) {
        let normalized = normalize_angle(angle);
        prop_assert!((0.0..TAU).contains(&normalized));
        prop_assert!((normalized.cos() - angle.cos()).abs() < EPSILON);
        prop_assert!((normalized.sin() - angle.sin()).abs() < EPSILON);
    }

    /// Readable angles always keep the text baseline pointing rightward
    #[test]
    fn prop_readable_angle_upright(angle in -std::f64::consts::PI..std::f64::consts::PI) {
        let readable = readable_angle(angle);
        prop_assert!(readable.cos() >= -EPSILON);
        // Same line, possibly reversed
        prop_assert!((readable.sin() * angle.cos() - readable.cos() * angle.sin()).abs() < EPSILON);
    }
}

#[test]
fn test_distance_three_four_five() {
    assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
}
