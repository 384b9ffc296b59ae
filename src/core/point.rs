//! Point and coordinate types for the occupancy grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Discrete cell coordinates.
///
/// Coordinates are relative to the map's world origin, so they may be
/// negative: cell `(i, j)` covers `[i*scale, (i+1)*scale) x [j*scale, (j+1)*scale)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DiscretePoint2D {
    /// X coordinate (column)
    pub x: i32,
    /// Y coordinate (row)
    pub y: i32,
}

impl DiscretePoint2D {
    /// Create a new cell coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance (max of x and y distance)
    #[inline]
    pub fn chebyshev_distance(&self, other: &DiscretePoint2D) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Add for DiscretePoint2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        DiscretePoint2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for DiscretePoint2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        DiscretePoint2D::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for DiscretePoint2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// World coordinates (meters)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters
    pub y: f64,
}

impl Point2D {
    /// Zero point (origin)
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Create a new world point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Create a point at a given angle and distance from this point
    #[inline]
    pub fn point_at(&self, angle: f64, distance: f64) -> Point2D {
        Point2D::new(
            self.x + distance * angle.cos(),
            self.y + distance * angle.sin(),
        )
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discrete_point_arithmetic() {
        let a = DiscretePoint2D::new(3, -2);
        let b = DiscretePoint2D::new(-1, 5);
        assert_eq!(a + b, DiscretePoint2D::new(2, 3));
        assert_eq!(a - b, DiscretePoint2D::new(4, -7));
        assert_eq!(a.chebyshev_distance(&b), 7);
    }

    #[test]
    fn test_discrete_point_display() {
        assert_eq!(DiscretePoint2D::new(10, -29).to_string(), "(10, -29)");
    }

    #[test]
    fn test_point_distance() {
        let a = Point2D::ZERO;
        let b = Point2D::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_point_at() {
        let p = Point2D::new(1.0, 1.0).point_at(std::f64::consts::FRAC_PI_2, 2.0);
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-12);
    }
}
