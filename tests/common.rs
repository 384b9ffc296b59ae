//! Test utilities for Drishti.
//!
//! This module provides fixture maps built from text rasters and scan
//! comparison helpers.

#![allow(dead_code)]

use approx::assert_relative_eq;
use drishti::core::math::angles_approx_equal;
use drishti::{
    AreaOccupancyObservation, DiscretePoint2D, ExtentPolicy, GridCell, GridMap, GridMapParams,
    Occupancy, Point2D, RobotPose, ScanPoint,
};

/// Dead-end corridor, open at the bottom.
pub const CECUM_CORRIDOR: &str = "+-+\n| |\n| |";
pub const CECUM_PATCH_W: i32 = 3;
pub const CECUM_PATCH_H: i32 = 3;
pub const CECUM_FREE_W: i32 = 1;
pub const CECUM_FREE_H: i32 = 2;
/// Top-left free raster cell, relative to the top-left corner
pub const CECUM_FREE_X_START: i32 = 1;
pub const CECUM_FREE_Y_START: i32 = -1;

pub const MAP_WIDTH: usize = 100;
pub const MAP_HEIGHT: usize = 100;
pub const MAP_SCALE: f64 = 1.0;
pub const PATCH_SCALE: i32 = 10;

/// Unbounded map whose cells all start free with zero confidence.
pub fn empty_map() -> GridMap {
    GridMap::with_prototype(
        GridMapParams::new(MAP_WIDTH, MAP_HEIGHT, MAP_SCALE),
        ExtentPolicy::Unbounded,
        GridCell::with_occupancy(Occupancy::new(0.0, 0.0)),
    )
    .unwrap()
}

/// Pose in the middle of cell (0, 0).
pub fn base_pose() -> RobotPose {
    RobotPose::new(MAP_SCALE / 2.0, MAP_SCALE / 2.0, 0.0)
}

/// Stamp a text raster into the map with its top-left corner at cell (0, 0).
///
/// Rows go towards negative y. Every character covers `scale x scale`
/// cells; spaces are observed free, everything else occupied.
pub fn apply_text_raster(map: &mut GridMap, raster: &str, scale: i32) {
    for (row, line) in raster.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let obs = if ch == ' ' {
                AreaOccupancyObservation::free_at(Point2D::ZERO)
            } else {
                AreaOccupancyObservation::occupied_at(Point2D::ZERO)
            };
            for dy in 0..scale {
                for dx in 0..scale {
                    let coord = DiscretePoint2D::new(
                        col as i32 * scale + dx,
                        -(row as i32 * scale + dy),
                    );
                    map.update_cell(coord, &obs).unwrap();
                }
            }
        }
    }
}

/// Map with the cecum corridor stamped at `PATCH_SCALE`.
pub fn cecum_map() -> GridMap {
    let mut map = empty_map();
    apply_text_raster(&mut map, CECUM_CORRIDOR, PATCH_SCALE);
    map
}

/// Compare scan points and check that every reported hit lies in an
/// occupied cell.
pub fn check_scan_points(map: &GridMap, pose: &RobotPose, expected: &[ScanPoint], actual: &[ScanPoint]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
    for (e, a) in expected.iter().zip(actual) {
        assert!(
            angles_approx_equal(e.angle, a.angle, 1e-9),
            "angle: expected {}, got {}",
            e.angle,
            a.angle
        );
        assert!(a.angle > -std::f64::consts::PI && a.angle <= std::f64::consts::PI);
        assert_relative_eq!(e.range, a.range, epsilon = 1e-6);
        assert_eq!(e.is_occupied, a.is_occupied);

        // Just past the entry point the ray is inside the hit cell
        let hit = map.world_to_cell_by_vec(pose.x, pose.y, a.range + 1e-6, pose.theta + a.angle);
        assert!(map[hit].is_occupied(), "hit cell {} is not occupied", hit);
    }
}

/// Hit expectation.
pub fn sp(range: f64, angle_deg: f64) -> ScanPoint {
    ScanPoint::new(range, drishti::core::math::deg_to_rad(angle_deg), true)
}
