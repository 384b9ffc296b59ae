//! Tolerance-aware comparisons and angle utilities.
//!
//! Every cell-boundary decision in the grid traversal goes through these
//! predicates. The tolerance scales with the magnitude of the operands, so
//! the same comparison stays meaningful for centimeter grids and for maps
//! whose coordinates run into the millions.
//!
//! All angles are in radians, counter-clockwise positive from +X.

use std::f64::consts::{PI, TAU};

/// Relative tolerance used by [`are_equal`].
///
/// `f64::EPSILON` is far too tight once values have gone through a
/// division and a trigonometric call.
pub const EPSILON: f64 = 1e-7;

/// Scale-relative equality: `|a - b| <= EPSILON * max(1, |a|, |b|)`.
///
/// # Example
/// ```
/// use drishti::core::math::are_equal;
///
/// assert!(are_equal(0.1 + 0.2, 0.3));
/// assert!(are_equal(1e9, 1e9 + 1.0));
/// assert!(!are_equal(1.0, 1.001));
/// ```
#[inline]
pub fn are_equal(a: f64, b: f64) -> bool {
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= EPSILON * scale
}

/// `a <= b`, where values within tolerance count as equal.
#[inline]
pub fn less_or_equal(a: f64, b: f64) -> bool {
    are_equal(a, b) || a < b
}

/// `a <= b <= c` under the same tolerance as [`less_or_equal`].
#[inline]
pub fn are_ordered(a: f64, b: f64, c: f64) -> bool {
    less_or_equal(a, b) && less_or_equal(b, c)
}

/// Is `value / factor` within tolerance of an integer?
///
/// The ratio is compared against its nearest integer, so a quotient of
/// `2.9999999` counts as a multiple.
#[inline]
pub fn is_multiple_of(value: f64, factor: f64) -> bool {
    let ratio = value / factor;
    are_equal(ratio, ratio.round())
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Smallest power of `base` that is greater than or equal to `i`.
///
/// Returns 1 for `i <= 1`. Used to size grid growth steps.
pub fn next_power_of(base: usize, i: usize) -> usize {
    debug_assert!(base >= 2);
    let mut power = 1usize;
    while power < i {
        power = power.saturating_mul(base);
    }
    power
}

/// Normalize angle to (-π, π].
///
/// # Example
/// ```
/// use drishti::core::math::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(normalize_angle(-PI), PI);
/// assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

/// Shortest signed angular difference from `from` to `to`, in (-π, π].
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Check if two angles are approximately equal (within tolerance).
///
/// Handles wrap-around at ±π correctly.
#[inline]
pub fn angles_approx_equal(a: f64, b: f64, tolerance: f64) -> bool {
    angle_diff(a, b).abs() <= tolerance
}
