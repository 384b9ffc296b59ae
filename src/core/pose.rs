//! Robot pose and world-frame pose increments.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use super::math::angles_approx_equal;
use super::point::Point2D;

/// A 2D robot pose: position in meters, heading in radians.
///
/// The heading is stored as given, with no forced range. Consumers that
/// need a canonical angle normalize it themselves; heading comparisons go
/// through [`RobotPose::approx_eq`], which works modulo 2π.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RobotPose {
    /// X position in meters.
    pub x: f64,
    /// Y position in meters.
    pub y: f64,
    /// Heading in radians, CCW positive from +X.
    pub theta: f64,
}

impl RobotPose {
    /// Create a new pose.
    #[inline]
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Get the position as a Point2D.
    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Check if this pose is approximately equal to another.
    #[inline]
    pub fn approx_eq(self, other: RobotPose, pos_epsilon: f64, angle_epsilon: f64) -> bool {
        (self.x - other.x).abs() <= pos_epsilon
            && (self.y - other.y).abs() <= pos_epsilon
            && angles_approx_equal(self.theta, other.theta, angle_epsilon)
    }
}

/// Pose increment expressed directly in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RobotPoseDelta {
    /// X increment in meters.
    pub dx: f64,
    /// Y increment in meters.
    pub dy: f64,
    /// Heading increment in radians.
    pub dtheta: f64,
}

impl RobotPoseDelta {
    /// Create a new delta.
    #[inline]
    pub fn new(dx: f64, dy: f64, dtheta: f64) -> Self {
        Self { dx, dy, dtheta }
    }
}

impl Add<RobotPoseDelta> for RobotPose {
    type Output = RobotPose;

    /// Componentwise sum; the delta is not rotated into the pose frame.
    #[inline]
    fn add(self, delta: RobotPoseDelta) -> RobotPose {
        RobotPose::new(
            self.x + delta.dx,
            self.y + delta.dy,
            self.theta + delta.dtheta,
        )
    }
}

impl AddAssign<RobotPoseDelta> for RobotPose {
    #[inline]
    fn add_assign(&mut self, delta: RobotPoseDelta) {
        *self = *self + delta;
    }
}
