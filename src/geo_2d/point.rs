use std::ops::Mul;
use std::fmt;
use serde::{Serialize, Deserialize};

/// A point in the 2D plane.
/// Contains the Cartesian coordinates of the point.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Point{x, y}
    }

    /// Get the Euclidean distance between two points.
    /// `hypot` avoids squaring, so only distances beyond `f32::MAX` overflow.
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        dx.hypot(dy)
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(f, "({:.*},{:.*})", precision, self.x, precision, self.y)
    }
}
impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Point{
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Free-function form of `Point::distance`.
pub fn distance(a: &Point, b: &Point) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_unit_and_diagonal() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(distance(&origin, &Point::new(0.0, 1.0)), 1.0);
        assert!((distance(&origin, &Point::new(1.0, 1.0)) - std::f32::consts::SQRT_2).abs() < 1e-6);
        assert_eq!(distance(&origin, &origin), 0.0);
    }

    #[test]
    fn distance_does_not_overflow_when_squares_would() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(origin.distance(&Point::new(2e19, 0.0)), 2e19);
        assert_eq!(origin.distance(&Point::new(0.0, -3e30)), 3e30);

        let d = origin.distance(&Point::new(3e25, 4e25));
        assert!((d - 5e25).abs() <= 5e25 * 1e-6, "d = {}", d);
    }

    #[test]
    fn distance_is_symmetric() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(3.0, -4.0),
            Point::new(-7.4, 6.4),
            Point::new(17.0, 123.24),
            Point::new(1.2, 1.2),
        ];
        for a in points.iter() {
            for b in points.iter() {
                assert_eq!(a.distance(b), b.distance(a));
                assert!(a.distance(b) >= 0.0);
            }
        }
    }

    #[test]
    fn display_uses_fixed_point() {
        let p = Point::new(1.0, -2.5);
        assert_eq!(format!("{}", p), "(1.000000,-2.500000)");
        assert_eq!(format!("{:.2}", p), "(1.00,-2.50)");
    }
}
