//! Laser scanner configuration.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::core::math::less_or_equal;
use crate::error::{Error, Result};

/// Upper bound on beams per scan.
pub const MAX_BEAMS: usize = 1 << 20;

/// Beam fan of a simulated 2D laser scanner.
///
/// Beams are cast at `-max_angle, -max_angle + angle_step, ...` up to
/// `+max_angle` inclusive (within tolerance), relative to the sensor
/// heading. The fan never covers more than one revolution: a beam that
/// would repeat the direction of the first one is not cast.
///
/// ```text
///   max_angle = 135°, angle_step = 33.75°  →  9 beams
///
///           0°
///     -33.75 │ 33.75
///        ╲   │   ╱
///  -67.5 ─── ● ─── 67.5
///        ╱       ╲
///   -101.25     101.25
///      ╱           ╲
///   -135           135
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaserScannerParams {
    max_range: f64,
    angle_step: f64,
    max_angle: f64,
}

impl LaserScannerParams {
    /// Create validated scanner parameters.
    ///
    /// * `max_range` - meters, must be positive
    /// * `angle_step` - radians between beams, must be positive
    /// * `max_angle` - radians, half of the field of view, within `[0, π]`
    ///
    /// Fans of more than [`MAX_BEAMS`] beams are rejected.
    pub fn new(max_range: f64, angle_step: f64, max_angle: f64) -> Result<Self> {
        if !max_range.is_finite() || max_range <= 0.0 {
            return Err(Error::InvalidSensorParams(format!(
                "max_range must be positive and finite, got {}",
                max_range
            )));
        }
        if !angle_step.is_finite() || angle_step <= 0.0 {
            return Err(Error::InvalidSensorParams(format!(
                "angle_step must be positive and finite, got {}",
                angle_step
            )));
        }
        if !max_angle.is_finite() || max_angle < 0.0 || !less_or_equal(max_angle, PI) {
            return Err(Error::InvalidSensorParams(format!(
                "max_angle must be within [0, π], got {}",
                max_angle
            )));
        }
        let span = (2.0 * max_angle).min(TAU);
        if span / angle_step >= MAX_BEAMS as f64 {
            return Err(Error::InvalidSensorParams(format!(
                "angle_step {} gives more than {} beams over {} rad",
                angle_step, MAX_BEAMS, span
            )));
        }
        Ok(Self {
            max_range,
            angle_step,
            max_angle,
        })
    }

    /// Maximum beam length in meters.
    #[inline]
    pub fn max_range(&self) -> f64 {
        self.max_range
    }

    /// Angle between adjacent beams in radians.
    #[inline]
    pub fn angle_step(&self) -> f64 {
        self.angle_step
    }

    /// Half of the field of view in radians.
    #[inline]
    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    /// Beam angles relative to the sensor heading, in increasing order.
    ///
    /// Each angle is computed from its index, so the last beam carries no
    /// accumulated error.
    pub fn beam_angles(&self) -> impl Iterator<Item = f64> + '_ {
        (0u32..)
            .map(move |k| k as f64 * self.angle_step)
            .take_while(move |&offset| {
                less_or_equal(offset - self.max_angle, self.max_angle)
                    && !less_or_equal(TAU, offset)
            })
            .map(move |offset| offset - self.max_angle)
    }

    /// Number of beams per scan.
    pub fn beam_count(&self) -> usize {
        self.beam_angles().count()
    }
}
