//! Simulated laser scans from an occupancy grid.
//!
//! For every beam of the fan:
//! 1. Cast a ray from the robot position along `pose.theta + beam_angle`
//! 2. Walk the cells it passes through, nearest first ([`GridRay`])
//! 3. The first occupied cell is a hit; the range is the distance at which
//!    the ray enters it, not the distance to its center
//! 4. Leaving the map extent or `max_range` first is a miss and yields no point
//!
//! A robot standing in an occupied cell gets `range = 0` on every beam.

use crate::core::math::normalize_angle;
use crate::core::RobotPose;
use crate::grid::{GridMap, GridRay};

use super::params::LaserScannerParams;
use super::types::{LaserScan2D, ScanPoint};

/// Deterministic 2D laser scan generator.
///
/// Holds only its parameters; scans are a pure function of map and pose.
#[derive(Clone, Debug)]
pub struct LaserScanGenerator {
    params: LaserScannerParams,
}

impl LaserScanGenerator {
    /// Create a generator for the given beam fan.
    pub fn new(params: LaserScannerParams) -> Self {
        Self { params }
    }

    /// Beam fan of this generator.
    #[inline]
    pub fn params(&self) -> &LaserScannerParams {
        &self.params
    }

    /// Scan `map` from `pose`.
    ///
    /// Only beams that hit appear in the result, in increasing beam angle.
    pub fn generate_2d_laser_scan(&self, map: &GridMap, pose: &RobotPose) -> LaserScan2D {
        let origin = pose.position();
        let mut points = Vec::new();
        let mut beams = 0usize;

        for beam_angle in self.params.beam_angles() {
            beams += 1;
            let heading = pose.theta + beam_angle;
            let ray = GridRay::new(origin, heading, map.scale(), self.params.max_range());

            if let Some(range) = first_hit(map, ray) {
                let point = ScanPoint::new(range, normalize_angle(beam_angle), true);
                log::trace!(
                    "Beam {:.4} rad hit at {:.4} m",
                    point.angle,
                    point.range
                );
                points.push(point);
            }
        }

        log::debug!(
            "Scan from ({:.3}, {:.3}, {:.3}): {} of {} beams hit",
            pose.x,
            pose.y,
            pose.theta,
            points.len(),
            beams
        );

        LaserScan2D::new(points)
    }
}

/// Entry distance of the first occupied cell on the ray, or `None` if the
/// ray runs out of range or leaves the map extent first.
fn first_hit(map: &GridMap, ray: GridRay) -> Option<f64> {
    for visited in ray {
        let cell = map.get(visited.coord)?;
        if cell.is_occupied() {
            return Some(visited.entry);
        }
    }
    None
}
