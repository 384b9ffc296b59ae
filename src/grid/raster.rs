//! Occupancy raster export.
//!
//! Flattens a [`GridMap`] into the row-major `i8` layout used by map
//! viewers and the ROS `nav_msgs/OccupancyGrid` message: `-1` for unknown,
//! otherwise the occupancy probability in percent.

use serde::{Deserialize, Serialize};

use super::storage::GridMap;

/// Value of an unknown cell in [`OccupancyRaster::data`].
pub const UNKNOWN_CELL: i8 = -1;

/// Snapshot of a grid map as a percent-occupancy raster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OccupancyRaster {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Meters per cell
    pub resolution: f64,
    /// World X of the lower-left corner of cell data[0]
    pub origin_x: f64,
    /// World Y of the lower-left corner of cell data[0]
    pub origin_y: f64,
    /// Row-major cells, lowest row first
    pub data: Vec<i8>,
}

impl OccupancyRaster {
    /// Snapshot the current extent of `map`.
    pub fn from_map(map: &GridMap) -> Self {
        let data = map
            .cells()
            .flatten()
            .map(|cell| match cell.occupancy() {
                None => UNKNOWN_CELL,
                Some(occ) => (occ.prob() * 100.0) as i8,
            })
            .collect();

        Self {
            width: map.width(),
            height: map.height(),
            resolution: map.scale(),
            origin_x: -map.scale() * map.map_center_x() as f64,
            origin_y: -map.scale() * map.map_center_y() as f64,
            data,
        }
    }

    /// Raster value at storage column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<i8> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AreaOccupancyObservation, DiscretePoint2D, Occupancy, Point2D};
    use crate::grid::GridMapParams;

    #[test]
    fn test_from_map() {
        let mut map = GridMap::bounded(GridMapParams::new(4, 2, 0.5)).unwrap();
        map.update_cell(
            DiscretePoint2D::new(-2, -1),
            &AreaOccupancyObservation::occupied_at(Point2D::ZERO),
        )
        .unwrap();
        map.update_cell(
            DiscretePoint2D::new(1, 0),
            &AreaOccupancyObservation::new(false, Occupancy::new(0.25, 0.5), Point2D::ZERO, 1.0),
        )
        .unwrap();

        let raster = OccupancyRaster::from_map(&map);
        assert_eq!(raster.width, 4);
        assert_eq!(raster.height, 2);
        assert_eq!(raster.resolution, 0.5);
        assert_eq!(raster.origin_x, -1.0);
        assert_eq!(raster.origin_y, -0.5);
        assert_eq!(raster.data, vec![100, -1, -1, -1, -1, -1, -1, 25]);
        assert_eq!(raster.get(3, 1), Some(25));
        assert_eq!(raster.get(4, 0), None);
    }
}
