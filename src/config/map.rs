//! Map configuration section.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{ExtentPolicy, GridMap, GridMapParams};

use super::defaults;

/// Map configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapSection {
    /// Initial width (cells)
    #[serde(default = "defaults::map_size")]
    pub width: usize,

    /// Initial height (cells)
    #[serde(default = "defaults::map_size")]
    pub height: usize,

    /// Cell size (meters)
    #[serde(default = "defaults::scale")]
    pub scale: f64,

    /// Grow the map on writes outside its extent
    #[serde(default)]
    pub unbounded: bool,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            scale: 0.05,
            unbounded: false,
        }
    }
}

impl MapSection {
    /// Grid dimensions and scale
    pub fn to_params(&self) -> GridMapParams {
        GridMapParams::new(self.width, self.height, self.scale)
    }

    /// Extent policy selected by `unbounded`
    pub fn policy(&self) -> ExtentPolicy {
        if self.unbounded {
            ExtentPolicy::Unbounded
        } else {
            ExtentPolicy::Bounded
        }
    }

    /// Create an empty map
    pub fn build(&self) -> Result<GridMap> {
        match self.policy() {
            ExtentPolicy::Bounded => GridMap::bounded(self.to_params()),
            ExtentPolicy::Unbounded => GridMap::unbounded(self.to_params()),
        }
    }
}
