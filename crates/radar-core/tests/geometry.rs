// File: crates/radar-core/tests/geometry.rs
// Purpose: Laws of the polar-to-grid transform (axis angles, radii, rounding, sampling).

use std::f64::consts::{FRAC_PI_2, PI};

use radar_core::geometry::{
    axis_angle, lerp_point, point_on_axis, ring_radius, ring_sample_angle, round_half_up, value_radius,
    GridPoint,
};
use radar_core::grid::{linspace, ring_degrees, unit_steps};

#[test]
fn axis_zero_points_up_for_every_count() {
    for n in 1..=20 {
        assert_eq!(axis_angle(0, n), -FRAC_PI_2, "n = {n}");
        let up = point_on_axis(axis_angle(0, n), 8.0, GridPoint::new(20, 10));
        assert_eq!(up, GridPoint::new(20, 2), "n = {n}");
    }
}

#[test]
fn axis_angles_are_evenly_spaced_and_increasing() {
    for n in 1..=12 {
        let step = 2.0 * PI / n as f64;
        for i in 1..n {
            let d = axis_angle(i, n) - axis_angle(i - 1, n);
            assert!(d > 0.0, "angles must increase (n = {n}, i = {i})");
            assert!((d - step).abs() < 1e-12, "spacing {d} != {step} (n = {n})");
        }
    }
}

#[test]
fn zero_radius_maps_to_center() {
    let c = GridPoint::new(20, 10);
    for deg in 0..360 {
        assert_eq!(point_on_axis(ring_sample_angle(deg), 0.0, c), c);
    }
    for n in 1..=10 {
        for i in 0..n {
            assert_eq!(point_on_axis(axis_angle(i, n), 0.0, c), c);
        }
    }
}

#[test]
fn ring_samples_sit_on_their_radius() {
    let c = GridPoint::new(20, 10);
    let max_radius = 8.0;
    let tolerance = 0.5_f64.sqrt() + 1e-9;
    for (level, expect) in [(5, max_radius), (1, max_radius / 5.0)] {
        let r = ring_radius(level, max_radius, 5);
        assert!((r - expect).abs() < 1e-12);
        for deg in ring_degrees(10) {
            let p = point_on_axis(ring_sample_angle(deg), r, c);
            let dist = (((p.x - c.x) as f64).powi(2) + ((p.y - c.y) as f64).powi(2)).sqrt();
            assert!((dist - expect).abs() <= tolerance, "level {level} deg {deg}: {dist} vs {expect}");
        }
    }
}

#[test]
fn value_radius_scales_linearly() {
    assert_eq!(value_radius(5.0, 8.0, 5.0), 8.0);
    assert_eq!(value_radius(0.0, 8.0, 5.0), 0.0);
    assert!((value_radius(1.0, 8.0, 5.0) - 1.6).abs() < 1e-12);
    // Out-of-scale values extrapolate rather than clamp.
    assert_eq!(value_radius(10.0, 8.0, 5.0), 16.0);
}

#[test]
fn rounding_goes_half_up() {
    assert_eq!(round_half_up(2.5), 3);
    assert_eq!(round_half_up(-2.5), -2);
    assert_eq!(round_half_up(2.4999), 2);
    assert_eq!(round_half_up(-0.0), 0);
    assert_eq!(round_half_up(8.4), 8);
}

#[test]
fn lerp_endpoints_are_exact() {
    let a = GridPoint::new(20, 8);
    let b = GridPoint::new(13, 14);
    assert_eq!(lerp_point(a, b, 0.0), a);
    assert_eq!(lerp_point(a, b, 1.0), b);
    assert_eq!(lerp_point(a, b, 0.5), GridPoint::new(17, 11));
}

#[test]
fn sampling_helpers() {
    let ts = linspace(0.0, 1.0, 11);
    assert_eq!(ts.len(), 11);
    assert_eq!(ts[0], 0.0);
    assert_eq!(ts[3], 0.3);
    assert_eq!(ts[7], 0.7);
    assert_eq!(ts[10], 1.0);

    assert_eq!(ring_degrees(10).count(), 36);
    assert_eq!(ring_degrees(10).last(), Some(350));

    assert_eq!(unit_steps(8.0).collect::<Vec<_>>(), (0..=8).map(f64::from).collect::<Vec<_>>());
    assert_eq!(unit_steps(-1.0).count(), 0);
}
