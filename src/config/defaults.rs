//! Default value functions for serde deserialization.

pub fn map_size() -> usize {
    100
}

pub fn scale() -> f64 {
    0.05
}

pub fn max_range() -> f64 {
    8.0
}

pub fn angle_step_deg() -> f64 {
    1.0
}

pub fn max_angle_deg() -> f64 {
    180.0
}
