//! Configuration loading for Drishti.
//!
//! Loads map and scanner settings from a single YAML file with sensible
//! defaults. Every field is optional.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti::config::DrishtiConfig;
//!
//! let config = DrishtiConfig::load(Path::new("configs/drishti.yaml"))?;
//!
//! let map = config.build_map()?;
//! let generator = config.build_generator()?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`MapSection`] | Initial dimensions, cell size, extent policy |
//! | [`ScannerSection`] | Beam range and fan (degrees) |
//!
//! ## Example YAML
//!
//! ```yaml
//! map:
//!   width: 400        # cells
//!   height: 400
//!   scale: 0.05       # 5cm cells
//!   unbounded: true   # grow on writes outside the extent
//!
//! scanner:
//!   max_range: 8.0
//!   angle_step_deg: 1.0
//!   max_angle_deg: 180.0   # full circle
//! ```

mod defaults;
mod drishti;
mod map;
mod scanner;

pub use drishti::DrishtiConfig;
pub use map::MapSection;
pub use scanner::ScannerSection;
