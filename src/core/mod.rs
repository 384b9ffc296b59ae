//! Core types for the Drishti library.
//!
//! This module provides the value types shared by the grid map and the
//! scan generator. Coordinates follow the ROS REP-103 convention:
//! - **X-axis**: Forward
//! - **Y-axis**: Left
//! - **Theta**: Counter-clockwise rotation from +X axis (radians)
//!
//! ## Type Categories
//!
//! ### Numerics
//! - [`math`]: scale-relative float comparisons and angle helpers
//!
//! ### Coordinates
//! - [`DiscretePoint2D`]: Integer cell coordinates, relative to the world origin
//! - [`Point2D`]: Floating-point world coordinates in meters
//!
//! ### Robot State
//! - [`RobotPose`]: Position (x, y) and heading (theta)
//! - [`RobotPoseDelta`]: World-frame pose increment
//!
//! ### Grid Cells
//! - [`Occupancy`]: Occupancy probability with confidence
//! - [`AreaOccupancyObservation`]: Observation fused into a cell
//! - [`GridCell`]: Unknown placeholder or occupancy estimate

mod cell;
mod occupancy;
mod point;
mod pose;

pub mod math;

pub use cell::GridCell;
pub use occupancy::{AreaOccupancyObservation, Occupancy};
pub use point::{DiscretePoint2D, Point2D};
pub use pose::{RobotPose, RobotPoseDelta};
