//! Simulated 2D laser scans.
//!
//! [`LaserScanGenerator`] casts a fan of beams ([`LaserScannerParams`])
//! through a [`GridMap`](crate::grid::GridMap) and reports where each beam
//! first meets a fully occupied cell. The result is sparse: beams that
//! leave the map or run out of range produce no [`ScanPoint`].
//!
//! ## Example
//!
//! ```rust
//! use drishti::core::math::deg_to_rad;
//! use drishti::core::{AreaOccupancyObservation, DiscretePoint2D, Point2D, RobotPose};
//! use drishti::grid::{GridMap, GridMapParams};
//! use drishti::scan::{LaserScanGenerator, LaserScannerParams};
//!
//! let mut map = GridMap::bounded(GridMapParams::new(40, 40, 1.0)).unwrap();
//! let wall = AreaOccupancyObservation::occupied_at(Point2D::ZERO);
//! for y in -20..20 {
//!     map.update_cell(DiscretePoint2D::new(5, y), &wall).unwrap();
//! }
//!
//! let params = LaserScannerParams::new(10.0, deg_to_rad(45.0), deg_to_rad(45.0)).unwrap();
//! let scan = LaserScanGenerator::new(params)
//!     .generate_2d_laser_scan(&map, &RobotPose::new(0.5, 0.5, 0.0));
//!
//! // -45°, 0° and 45° all reach the wall at x = 5
//! assert_eq!(scan.len(), 3);
//! assert!((scan.points[1].range - 4.5).abs() < 1e-9);
//! ```

mod generator;
mod params;
mod types;

pub use generator::LaserScanGenerator;
pub use params::LaserScannerParams;
pub use types::{LaserScan2D, ScanPoint};
