//! Main DrishtiConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::GridMap;
use crate::scan::{LaserScanGenerator, LaserScannerParams};

use super::map::MapSection;
use super::scanner::ScannerSection;

/// Full Drishti configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Map settings
    #[serde(default)]
    pub map: MapSection,

    /// Laser scanner settings
    #[serde(default)]
    pub scanner: ScannerSection,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loading config from {}", path.display());
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create an empty map as configured
    pub fn build_map(&self) -> Result<GridMap> {
        self.map.build()
    }

    /// Validated scanner parameters
    pub fn build_scanner_params(&self) -> Result<LaserScannerParams> {
        self.scanner.to_params()
    }

    /// Create a scan generator as configured
    pub fn build_generator(&self) -> Result<LaserScanGenerator> {
        Ok(LaserScanGenerator::new(self.build_scanner_params()?))
    }
}
