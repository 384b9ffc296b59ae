//! # Drishti
//!
//! Occupancy grid map and deterministic 2D laser scan simulation.
//!
//! ## Overview
//!
//! Drishti keeps a grid of cells, each either never observed or carrying
//! an occupancy estimate, and answers the question "what would a 2D range
//! sensor at this pose see?" by walking every beam through the grid cell
//! by cell.
//!
//! - **Unknown** - Never observed (value `-1`)
//! - **Estimated** - Occupancy probability with confidence
//!
//! Only cells whose occupancy is exactly 1 stop a beam.
//!
//! ## Features
//!
//! - **Grid Map**: bounded or grow-on-write extent, world/cell transforms,
//!   confidence-weighted occupancy fusion
//! - **Exact Ray Traversal**: parametric DDA visiting every cell a ray
//!   touches, with tolerance-aware boundary and corner handling
//! - **Scan Generation**: sparse range/angle hits for a configurable beam fan
//! - **Export**: percent-occupancy raster for viewers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti::{DrishtiConfig, RobotPose};
//!
//! let config = DrishtiConfig::default();
//! let mut map = config.build_map()?;
//! let generator = config.build_generator()?;
//!
//! // Fill the map with observations
//! map.cell_occupancy_update(obs.world_point, &obs)?;
//!
//! let scan = generator.generate_2d_laser_scan(&map, &RobotPose::new(0.0, 0.0, 0.0));
//! for point in &scan {
//!     println!("{:.3} rad -> {:.3} m", point.angle, point.range);
//! }
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of robot)
//! - Y: Left (positive to robot's left)
//! - Theta: Rotation in radians, CCW positive from +X axis

#![warn(missing_docs)]

// Core types
pub mod core;

// Grid storage and traversal
pub mod grid;

// Laser scan simulation
pub mod scan;

// YAML configuration
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    AreaOccupancyObservation, DiscretePoint2D, GridCell, Occupancy, Point2D, RobotPose,
    RobotPoseDelta,
};

pub use crate::grid::{ExtentPolicy, GridMap, GridMapParams, GridRay, OccupancyRaster, RayCell};

pub use crate::scan::{LaserScan2D, LaserScanGenerator, LaserScannerParams, ScanPoint};

pub use crate::config::DrishtiConfig;

pub use crate::error::{Error, Result};
