// File: crates/radar-core/src/geometry.rs
// Summary: Polar-to-grid math for radar charts (axis angles, ring/value radii, rounding).

use std::f64::consts::{FRAC_PI_2, PI};

/// Integer cell coordinate. May lie outside any canvas; clipping happens at paint time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self { x: self.x.saturating_add(dx), y: self.y.saturating_add(dy) }
    }
}

/// Round to the nearest integer, halves going up (toward +inf).
/// Every coordinate in the chart goes through this so vertices, edges and
/// strokes agree on which cell a sample lands in.
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Angle of axis `i` out of `n`: axis 0 points up, the rest follow clockwise.
/// Contract: `n >= 1`.
#[inline]
pub fn axis_angle(i: usize, n: usize) -> f64 {
    debug_assert!(n > 0, "axis_angle needs at least one axis");
    (i as f64 * 2.0 * PI) / n as f64 - FRAC_PI_2
}

/// Angle in radians for a ring sample given in whole degrees.
#[inline]
pub fn ring_sample_angle(degrees: u32) -> f64 {
    (degrees as f64 * PI) / 180.0
}

/// Cell reached by walking `radius` cells from `center` along `angle`.
#[inline]
pub fn point_on_axis(angle: f64, radius: f64, center: GridPoint) -> GridPoint {
    GridPoint {
        x: round_half_up(center.x as f64 + radius * angle.cos()),
        y: round_half_up(center.y as f64 + radius * angle.sin()),
    }
}

/// Radius of reference ring `level` (1-based) when `levels` rings span `max_radius`.
#[inline]
pub fn ring_radius(level: u32, max_radius: f64, levels: u32) -> f64 {
    (max_radius / levels as f64) * level as f64
}

/// Radius of a data value on a `0..=scale_max` scale.
#[inline]
pub fn value_radius(value: f64, max_radius: f64, scale_max: f64) -> f64 {
    (value / scale_max) * max_radius
}

/// Rounded point at fraction `t` of the way from `a` to `b`.
/// Differences are taken in `f64`; vertices of far out-of-scale values sit near the `i32` limits.
#[inline]
pub fn lerp_point(a: GridPoint, b: GridPoint, t: f64) -> GridPoint {
    GridPoint {
        x: round_half_up(a.x as f64 + t * (b.x as f64 - a.x as f64)),
        y: round_half_up(a.y as f64 + t * (b.y as f64 - a.y as f64)),
    }
}

