//! Occupancy grid storage and traversal.
//!
//! ## Architecture
//!
//! ```text
//!   AreaOccupancyObservation          LaserScanGenerator
//!              │                              │
//!              ▼                              ▼
//! ┌─────────────────────────┐      ┌─────────────────────┐
//! │        GridMap          │◄─────│      GridRay        │
//! │  bounded | unbounded    │ read │  (cell traversal)   │
//! └────────────┬────────────┘      └─────────────────────┘
//!              │
//!              ▼
//!      OccupancyRaster (export)
//! ```
//!
//! ## Key Components
//!
//! - [`GridMap`]: Cell storage, coordinate transforms, observation fusion
//! - [`GridMapParams`]: Grid dimensions and meters per cell
//! - [`ExtentPolicy`]: Fixed extent or grow-on-write
//! - [`GridRay`]: Exact DDA traversal of the cells along a ray
//! - [`OccupancyRaster`]: Percent-occupancy snapshot for viewers
//!
//! ## Example
//!
//! ```rust
//! use drishti::core::{AreaOccupancyObservation, Point2D};
//! use drishti::grid::{GridMap, GridMapParams};
//!
//! let mut map = GridMap::unbounded(GridMapParams::new(10, 10, 0.1)).unwrap();
//! let obs = AreaOccupancyObservation::occupied_at(Point2D::new(3.0, -2.0));
//! map.cell_occupancy_update(obs.world_point, &obs).unwrap();
//!
//! let cell = map.world_to_cell(3.0, -2.0);
//! assert!(map[cell].is_occupied());
//! ```

mod config;
mod raster;
mod raycaster;
mod storage;

pub use config::{ExtentPolicy, GridMapParams};
pub use raster::{OccupancyRaster, UNKNOWN_CELL};
pub use raycaster::{GridRay, RayCell};
pub use storage::GridMap;
