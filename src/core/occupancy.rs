//! Occupancy estimates and the observations that update them.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Occupancy estimate of a single cell.
///
/// Both fields are kept within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Occupancy {
    /// Probability that the cell is occupied.
    prob: f64,
    /// Weight of this estimate (0 = no information, 1 = certain).
    confidence: f64,
}

impl Occupancy {
    /// Certainly occupied.
    pub const OCCUPIED: Occupancy = Occupancy {
        prob: 1.0,
        confidence: 1.0,
    };

    /// Certainly free.
    pub const FREE: Occupancy = Occupancy {
        prob: 0.0,
        confidence: 1.0,
    };

    /// Create an estimate, clamping both fields into `[0, 1]`.
    pub fn new(prob: f64, confidence: f64) -> Self {
        let clamped = Self {
            prob: clamp_unit(prob),
            confidence: clamp_unit(confidence),
        };
        if clamped.prob != prob || clamped.confidence != confidence {
            log::warn!(
                "Occupancy ({}, {}) clamped to ({}, {})",
                prob,
                confidence,
                clamped.prob,
                clamped.confidence
            );
        }
        clamped
    }

    /// Occupancy probability.
    #[inline]
    pub fn prob(&self) -> f64 {
        self.prob
    }

    /// Estimate confidence.
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Fuse another estimate into this one.
    ///
    /// The observation's share is `c_o / (c_o + c * (1 - c_o))`: a certain
    /// observation replaces the estimate outright, a zero-confidence one
    /// leaves the probability unchanged. Confidences combine as
    /// `c + c_o * (1 - c)`, so consistent observations only ever raise it.
    pub fn fuse(self, observed: Occupancy) -> Occupancy {
        let (c, c_o) = (self.confidence, observed.confidence);
        let denom = c_o + c * (1.0 - c_o);
        let weight = if denom > 0.0 { c_o / denom } else { 0.0 };

        Occupancy {
            prob: clamp_unit(self.prob * (1.0 - weight) + observed.prob * weight),
            confidence: clamp_unit(c + c_o * (1.0 - c)),
        }
    }
}

/// Clamp into `[0, 1]`, mapping NaN to 0.
#[inline]
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// A single observation to be fused into the cell that owns `world_point`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaOccupancyObservation {
    /// Whether the observation reports an obstacle.
    pub is_occupied: bool,
    /// Observed occupancy.
    pub occupancy: Occupancy,
    /// World point the observation refers to.
    pub world_point: Point2D,
    /// Width of the observed area in cells.
    ///
    /// Carried for consumers; fusion weighs observations by
    /// `occupancy.confidence` only and ignores this field.
    pub cell_width_in_observation: f64,
}

impl AreaOccupancyObservation {
    /// Create an observation.
    pub fn new(
        is_occupied: bool,
        occupancy: Occupancy,
        world_point: Point2D,
        cell_width_in_observation: f64,
    ) -> Self {
        Self {
            is_occupied,
            occupancy,
            world_point,
            cell_width_in_observation,
        }
    }

    /// Certain obstacle at `world_point`.
    pub fn occupied_at(world_point: Point2D) -> Self {
        Self::new(true, Occupancy::OCCUPIED, world_point, 1.0)
    }

    /// Certain free space at `world_point`.
    pub fn free_at(world_point: Point2D) -> Self {
        Self::new(false, Occupancy::FREE, world_point, 1.0)
    }
}
