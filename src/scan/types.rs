//! Laser scan output types.

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, RobotPose};

/// A single beam return.
///
/// ```text
///                 angle = 0 (sensor heading)
///                      ↑
///        +π/2 (left) ←─●─→ -π/2 (right)
///                      ↓
///                     +π (back)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanPoint {
    /// Distance from the sensor to the obstacle in meters.
    pub range: f64,
    /// Beam angle relative to the sensor heading, in (-π, π].
    pub angle: f64,
    /// Whether the beam ended on an obstacle.
    pub is_occupied: bool,
}

impl ScanPoint {
    /// Create a new scan point.
    #[inline]
    pub fn new(range: f64, angle: f64, is_occupied: bool) -> Self {
        Self {
            range,
            angle,
            is_occupied,
        }
    }

    /// World position of this return when the scan was taken from `pose`.
    #[inline]
    pub fn world_point(&self, pose: &RobotPose) -> Point2D {
        pose.position().point_at(pose.theta + self.angle, self.range)
    }
}

/// Sparse laser scan: one point per beam that hit an obstacle, ordered by
/// increasing beam angle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LaserScan2D {
    /// Returns in beam order.
    pub points: Vec<ScanPoint>,
}

impl LaserScan2D {
    /// Create a scan from its points.
    pub fn new(points: Vec<ScanPoint>) -> Self {
        Self { points }
    }

    /// Number of returns.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Did no beam hit?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the returns.
    pub fn iter(&self) -> std::slice::Iter<'_, ScanPoint> {
        self.points.iter()
    }

    /// World positions of all returns for a scan taken from `pose`.
    pub fn to_world_points(&self, pose: &RobotPose) -> Vec<Point2D> {
        self.points.iter().map(|p| p.world_point(pose)).collect()
    }
}

impl<'a> IntoIterator for &'a LaserScan2D {
    type Item = &'a ScanPoint;
    type IntoIter = std::slice::Iter<'a, ScanPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
