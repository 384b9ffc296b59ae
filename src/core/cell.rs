//! Grid cell representation.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use super::math::are_equal;
use super::occupancy::{AreaOccupancyObservation, Occupancy};

/// A single cell of the grid map.
///
/// - `Unknown` - never observed; placeholder for every position without data
/// - `Estimated` - carries an occupancy estimate fused from observations
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub enum GridCell {
    /// Cell has never been observed
    #[default]
    Unknown,
    /// Cell with an occupancy estimate
    Estimated(Occupancy),
}

impl GridCell {
    /// Value reported for unknown cells by [`GridCell::value`].
    pub const UNKNOWN_VALUE: f64 = -1.0;

    /// Create a cell holding an estimate.
    #[inline]
    pub fn with_occupancy(occupancy: Occupancy) -> Self {
        GridCell::Estimated(occupancy)
    }

    /// Occupancy estimate, if the cell has one.
    #[inline]
    pub fn occupancy(&self) -> Option<Occupancy> {
        match self {
            GridCell::Unknown => None,
            GridCell::Estimated(occ) => Some(*occ),
        }
    }

    /// Scalar value for rendering and occupancy queries.
    ///
    /// `-1` for unknown cells, the occupancy probability in `[0, 1]` otherwise.
    #[inline]
    pub fn value(&self) -> f64 {
        match self {
            GridCell::Unknown => Self::UNKNOWN_VALUE,
            GridCell::Estimated(occ) => occ.prob(),
        }
    }

    /// Has this cell been observed?
    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, GridCell::Estimated(_))
    }

    /// Obstacle test used by scan generation: the value is exactly 1.
    ///
    /// Partially certain cells are traversable.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        are_equal(self.value(), 1.0)
    }

    /// Fuse an observation into this cell.
    pub fn observe(&mut self, observation: &AreaOccupancyObservation) {
        *self = match *self {
            GridCell::Unknown => GridCell::Estimated(observation.occupancy),
            GridCell::Estimated(occ) => GridCell::Estimated(occ.fuse(observation.occupancy)),
        };
    }
}

impl AddAssign<&AreaOccupancyObservation> for GridCell {
    #[inline]
    fn add_assign(&mut self, observation: &AreaOccupancyObservation) {
        self.observe(observation);
    }
}

impl AddAssign<AreaOccupancyObservation> for GridCell {
    #[inline]
    fn add_assign(&mut self, observation: AreaOccupancyObservation) {
        self.observe(&observation);
    }
}
