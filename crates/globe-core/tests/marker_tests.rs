use globe_core::marker::{build_marker, format_population};
use globe_core::{project, CountryRecord, MARKER_JITTER_MAX, MARKER_MIN_SIZE};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn zero_population_is_floored_at_minimum_size() {
    let mut rng = rng();
    for _ in 0..50 {
        let m = build_marker(&CountryRecord::new("Nowhere", 0, 10.0, 10.0), 5.0, &mut rng);
        assert_eq!(m.scale.x, MARKER_MIN_SIZE);
        assert_eq!(m.scale.y, MARKER_MIN_SIZE);
        assert!(m.scale.z >= MARKER_MIN_SIZE && m.scale.z < MARKER_JITTER_MAX);
    }
}

#[test]
fn large_population_scales_past_the_jitter() {
    let mut rng = rng();
    let m = build_marker(
        &CountryRecord::new("China", 1_402_000_000, 35.0, 105.0),
        5.0,
        &mut rng,
    );
    assert!((m.scale.x - 0.2 * 1.402).abs() < 1e-4);
    assert!((m.scale.z - 0.8 * 1.402).abs() < 1e-4);
}

#[test]
fn population_uses_grouping() {
    assert_eq!(format_population(1_000_000), "1,000,000");
    assert_eq!(format_population(1_380_000_000), "1,380,000,000");
    assert_eq!(format_population(42), "42");
}

#[test]
fn box_base_sits_on_surface_and_extends_outward() {
    let mut rng = rng();
    let record = CountryRecord::new("India", 1_380_000_000, 20.5937, 78.9629);
    let m = build_marker(&record, 5.0, &mut rng);
    let anchor = project(20.5937, 78.9629, 5.0);
    assert!((m.position - anchor).length() < 1e-5);

    let model = m.model_matrix(1.0);
    let base = model.transform_point3(Vec3::new(0.0, 0.0, 0.5));
    let top = model.transform_point3(Vec3::new(0.0, 0.0, -0.5));
    assert!((base - anchor).length() < 1e-4, "base {base:?} anchor {anchor:?}");
    assert!((top.length() - (5.0 + m.scale.z)).abs() < 1e-3);
}

#[test]
fn extrusion_keeps_the_base_fixed() {
    let mut rng = rng();
    let m = build_marker(&CountryRecord::new("Peru", 33_000_000, -9.19, -75.0), 5.0, &mut rng);
    let base_rest = m.model_matrix(1.0).transform_point3(Vec3::new(0.0, 0.0, 0.5));
    let base_peak = m.model_matrix(1.4).transform_point3(Vec3::new(0.0, 0.0, 0.5));
    assert!((base_rest - base_peak).length() < 1e-4);
    let top_peak = m.model_matrix(1.4).transform_point3(Vec3::new(0.0, 0.0, -0.5));
    assert!((top_peak.length() - (5.0 + 1.4 * m.scale.z)).abs() < 1e-3);
}
