//! Laser scanner configuration section.

use serde::{Deserialize, Serialize};

use crate::core::math::deg_to_rad;
use crate::error::Result;
use crate::scan::LaserScannerParams;

use super::defaults;

/// Laser scanner configuration section (angles in degrees)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScannerSection {
    /// Maximum beam length (meters)
    #[serde(default = "defaults::max_range")]
    pub max_range: f64,

    /// Angle between beams (degrees)
    #[serde(default = "defaults::angle_step_deg")]
    pub angle_step_deg: f64,

    /// Half of the field of view (degrees)
    #[serde(default = "defaults::max_angle_deg")]
    pub max_angle_deg: f64,
}

impl Default for ScannerSection {
    fn default() -> Self {
        Self {
            max_range: 8.0,
            angle_step_deg: 1.0,
            max_angle_deg: 180.0,
        }
    }
}

impl ScannerSection {
    /// Validated scanner parameters (radians)
    pub fn to_params(&self) -> Result<LaserScannerParams> {
        LaserScannerParams::new(
            self.max_range,
            deg_to_rad(self.angle_step_deg),
            deg_to_rad(self.max_angle_deg),
        )
    }
}
