//! Error types for Drishti

use crate::core::DiscretePoint2D;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Drishti error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cell access outside the extent of a bounded map
    #[error("Cell {coord} is outside the map extent ({width}x{height})")]
    OutOfBounds {
        /// Requested cell (map-relative coordinates)
        coord: DiscretePoint2D,
        /// Map width in cells at the time of access
        width: usize,
        /// Map height in cells at the time of access
        height: usize,
    },

    /// Laser scanner parameters rejected at construction
    #[error("Invalid sensor parameter: {0}")]
    InvalidSensorParams(String),

    /// Grid map parameters rejected at construction
    #[error("Invalid map parameter: {0}")]
    InvalidMapParams(String),

    /// I/O error while reading or writing configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}
