//! Configuration types for the grid map.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Grid dimensions and resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridMapParams {
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
    /// Meters per cell
    pub scale: f64,
}

impl GridMapParams {
    /// Create grid parameters.
    pub fn new(width: usize, height: usize, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Create parameters covering an area (in meters) at a given scale.
    pub fn for_area(width_m: f64, height_m: f64, scale: f64) -> Self {
        Self::new(
            (width_m / scale).ceil() as usize,
            (height_m / scale).ceil() as usize,
            scale,
        )
    }

    /// Reject empty grids and non-positive or non-finite scales.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidMapParams(format!(
                "grid must have at least one cell, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidMapParams(format!(
                "scale must be a positive finite number, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// What happens when a cell outside the current extent is accessed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtentPolicy {
    /// Extent is fixed; outside access is an [`Error::OutOfBounds`].
    #[default]
    Bounded,
    /// Outside reads see the unknown prototype; outside writes grow the grid.
    Unbounded,
}
