use clap::ValueEnum;
use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::geo_2d::{
    Point,
    GeoError,
    ProcResult,
    err_str,
};

/// What to do when the Heron radicand comes out negative.
/// This only happens through rounding on (nearly) collinear points,
/// or when side lengths that break the triangle inequality are passed in directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Treat the triangle as zero-area.
    #[default]
    Clamp,
    /// Report a numeric-domain error.
    Strict,
}

/// Heron's radicand `s*(s-s1)*(s-s2)*(s-s3)`, where `s` is the semi-perimeter.
pub fn heron_radicand(s1: f32, s2: f32, s3: f32) -> f32 {
    let s = 0.5 * (s1 + s2 + s3);
    s * (s - s1) * (s - s2) * (s - s3)
}

/// Area of a triangle from its three side lengths (Heron's formula).
/// No checks: a negative radicand gives NaN.
pub fn triangle_area(s1: f32, s2: f32, s3: f32) -> f32 {
    heron_radicand(s1, s2, s3).sqrt()
}

/// Area of a triangle from its three side lengths, with the radicand checked.
/// Non-finite sides (or a radicand overflowing `f32`) are always errors.
/// A negative radicand is clamped or reported according to `policy`.
pub fn checked_triangle_area(s1: f32, s2: f32, s3: f32, policy: DegeneratePolicy) -> ProcResult<f32> {
    if !(s1.is_finite() && s2.is_finite() && s3.is_finite()) {
        return err_str(&format!("Coordinates too large for single precision: side lengths {}, {}, {} are not finite", s1, s2, s3));
    }

    let radicand = heron_radicand(s1, s2, s3);
    debug!("Heron radicand for sides ({}, {}, {}): {:e}", s1, s2, s3, radicand);

    if !radicand.is_finite() {
        return err_str(&format!("Coordinates too large for single precision: Heron radicand overflowed for sides {}, {}, {}", s1, s2, s3));
    }

    // Also catches -0.0, which would otherwise print as "-0.000000"
    if radicand == 0.0 {
        return Ok(0.0);
    }

    if radicand < 0.0 {
        return match policy {
            DegeneratePolicy::Clamp => {
                warn!("Negative Heron radicand ({:e}) clamped to zero area", radicand);
                Ok(0.0)
            },
            DegeneratePolicy::Strict => Err(GeoError::NegativeRadicand(radicand)),
        };
    }

    Ok(radicand.sqrt())
}

/// A triangle given by its three corner points.
/// No check is made that the points are distinct or non-collinear.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub points: [Point; 3],
}
impl Triangle {
    /// Create a new triangle.
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Triangle{points: [p1, p2, p3]}
    }

    /// Side lengths, in the order `[s12, s23, s13]`.
    pub fn sides(&self) -> [f32; 3] {
        let [p1, p2, p3] = &self.points;
        [
            p1.distance(p2),
            p2.distance(p3),
            p1.distance(p3),
        ]
    }

    /// Area of the triangle, via its side lengths.
    pub fn area(&self, policy: DegeneratePolicy) -> ProcResult<f32> {
        let [s12, s23, s13] = self.sides();
        checked_triangle_area(s12, s23, s13, policy)
    }

    /// The same triangle with every coordinate multiplied by `k`.
    pub fn scaled(&self, k: f32) -> Self {
        let [p1, p2, p3] = self.points;
        Triangle::new(p1 * k, p2 * k, p3 * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_triangle() -> Triangle {
        Triangle::new(Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(0.0, 4.0))
    }

    #[test]
    fn right_triangle_area() {
        let tri = right_triangle();
        assert_eq!(tri.sides(), [3.0, 5.0, 4.0]);
        assert_eq!(tri.area(DegeneratePolicy::Clamp).unwrap(), 6.0);
    }

    #[test]
    fn equilateral_triangle_area() {
        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 3f32.sqrt()));
        let area = tri.area(DegeneratePolicy::Strict).unwrap();
        assert!((area - 3f32.sqrt()).abs() < 1e-5, "area = {}", area);
    }

    #[test]
    fn small_areas() {
        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 0.0));
        assert!((tri.area(DegeneratePolicy::Clamp).unwrap() - 0.5).abs() < 1e-6);

        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(0.0, 1.6), Point::new(10.0, 0.0));
        assert!((tri.area(DegeneratePolicy::Clamp).unwrap() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn scalene_matches_shoelace() {
        // Shoelace gives 565.852 for these points
        let tri = Triangle::new(Point::new(1.2, 1.2), Point::new(-7.4, 6.4), Point::new(17.0, 123.24));
        let area = tri.area(DegeneratePolicy::Clamp).unwrap();
        assert!((area - 565.852).abs() < 0.05, "area = {}", area);
    }

    #[test]
    fn collinear_is_zero() {
        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0));
        assert_eq!(tri.area(DegeneratePolicy::Clamp).unwrap(), 0.0);
        assert_eq!(tri.area(DegeneratePolicy::Strict).unwrap(), 0.0);

        let tri = Triangle::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert_eq!(tri.area(DegeneratePolicy::Strict).unwrap(), 0.0);
    }

    #[test]
    fn negative_radicand_policy() {
        // 1 + 1 < 3, so the radicand is negative
        assert!(heron_radicand(1.0, 1.0, 3.0) < 0.0);
        assert!(triangle_area(1.0, 1.0, 3.0).is_nan());

        assert_eq!(checked_triangle_area(1.0, 1.0, 3.0, DegeneratePolicy::Clamp).unwrap(), 0.0);
        match checked_triangle_area(1.0, 1.0, 3.0, DegeneratePolicy::Strict) {
            Err(GeoError::NegativeRadicand(r)) => assert!(r < 0.0),
            other => panic!("expected a negative radicand error, got {:?}", other),
        }
    }

    #[test]
    fn nearly_collinear_points_follow_policy() {
        // Rounding leaves s - s13 slightly negative
        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(0.1, 0.05), Point::new(9.35, 4.675));
        let [s12, s23, s13] = tri.sides();
        assert!(heron_radicand(s12, s23, s13) < 0.0);

        assert_eq!(tri.area(DegeneratePolicy::Clamp).unwrap(), 0.0);
        match tri.area(DegeneratePolicy::Strict) {
            Err(GeoError::NegativeRadicand(r)) => assert!(r < 0.0 && r > -1e-3, "r = {}", r),
            other => panic!("expected a negative radicand error, got {:?}", other),
        }
    }

    #[test]
    fn huge_degenerate_triangle_is_zero() {
        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(2e19, 0.0), Point::new(2e19, 0.0));
        assert_eq!(tri.sides(), [2e19, 0.0, 2e19]);
        assert_eq!(tri.area(DegeneratePolicy::Strict).unwrap(), 0.0);
    }

    #[test]
    fn radicand_overflow_names_single_precision() {
        let tri = Triangle::new(Point::new(0.0, 0.0), Point::new(1e10, 0.0), Point::new(0.0, 1e10));
        match tri.area(DegeneratePolicy::Clamp) {
            Err(GeoError::StringOnly(msg)) => assert!(msg.contains("too large for single precision"), "{}", msg),
            other => panic!("expected an overflow error, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_sides_are_errors() {
        assert!(checked_triangle_area(f32::INFINITY, 1.0, 1.0, DegeneratePolicy::Clamp).is_err());
        assert!(checked_triangle_area(f32::NAN, 1.0, 1.0, DegeneratePolicy::Clamp).is_err());
        assert!(checked_triangle_area(3e38, 3e38, 3e38, DegeneratePolicy::Clamp).is_err());
    }

    #[test]
    fn area_is_permutation_invariant() {
        let sides = [3.0, 4.0, 5.0];
        let expected = triangle_area(sides[0], sides[1], sides[2]);
        for (a, b, c) in [(0, 1, 2), (0, 2, 1), (1, 0, 2), (1, 2, 0), (2, 0, 1), (2, 1, 0)] {
            assert_eq!(triangle_area(sides[a], sides[b], sides[c]), expected);
        }

        let sides = [2.7f32, 6.1, 4.4];
        let expected = triangle_area(sides[0], sides[1], sides[2]);
        for (a, b, c) in [(0, 1, 2), (0, 2, 1), (1, 0, 2), (1, 2, 0), (2, 0, 1), (2, 1, 0)] {
            let area = triangle_area(sides[a], sides[b], sides[c]);
            assert!((area - expected).abs() <= expected * 1e-5);
        }
    }

    #[test]
    fn area_scales_quadratically() {
        let tri = Triangle::new(Point::new(1.0, 2.0), Point::new(4.5, -1.0), Point::new(-2.0, 3.5));
        let base = tri.area(DegeneratePolicy::Strict).unwrap();
        for k in [0.5f32, 2.0, 3.0, 10.0] {
            let scaled = tri.scaled(k).area(DegeneratePolicy::Strict).unwrap();
            assert!((scaled - base * k * k).abs() <= base * k * k * 1e-4, "k = {}: {} vs {}", k, scaled, base * k * k);
        }
    }
}
