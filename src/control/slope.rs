// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Instantaneous slope of a quarter circle, measured from its topmost point.

/// Returned when no vertical travel remains; compares greater than every band threshold.
pub const VERTICAL_SLOPE: f32 = 10_000.0;

/// Slope of the arc of `radius` once `x_remaining` horizontal and `y_remaining` vertical
/// eighth-steps are left to travel.
///
/// At the top of the circle (`x_remaining == y_remaining == radius`) the tangent is horizontal and
/// the slope is `0.0`. With no vertical travel left the tangent is vertical and
/// [`VERTICAL_SLOPE`] is returned instead of dividing by zero.
#[inline]
pub fn slope(radius: i32, x_remaining: i32, y_remaining: i32) -> f32 {
    if y_remaining == 0 {
        return VERTICAL_SLOPE;
    }
    (radius - x_remaining) as f32 / y_remaining as f32
}
