// File: crates/radar-core/src/grid.rs
// Summary: Sampling helpers for rings, axis strokes, and edge interpolation.

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// Each value is `start + (i / (steps - 1)) * (end - start)`, so `linspace(0.0, 1.0, 11)`
/// yields exactly `i / 10` with no accumulated error.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let last = (steps - 1) as f64;
    (0..steps).map(|i| start + (i as f64 / last) * (end - start)).collect()
}

/// Ring sample angles in degrees: `0, step, 2*step, ...` strictly below 360.
pub fn ring_degrees(step: u32) -> impl Iterator<Item = u32> {
    (0..360).step_by(step.max(1) as usize)
}

/// Unit radius steps `0, 1, ..., max` along an axis stroke.
pub fn unit_steps(max: f64) -> impl Iterator<Item = f64> {
    let last = if max >= 0.0 { max.floor() as u32 } else { 0 };
    (0..=last).map(f64::from).filter(move |r| *r <= max)
}
