use globe_core::starfield::generate_starfield;
use globe_core::{
    parse_countries, project, SceneContext, StarfieldPolicy, ViewerConfig, STAR_EXTENT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(3)
}

#[test]
fn resize_updates_aspect_and_surface_and_is_idempotent() {
    let mut scene = SceneContext::build(&ViewerConfig::static_globe(), &[], &mut rng());
    assert!(scene.resize(1600, 900));
    assert!((scene.camera.aspect - 1600.0 / 900.0).abs() < 1e-6);
    assert_eq!((scene.viewport.width, scene.viewport.height), (1600, 900));

    assert!(!scene.resize(1600, 900));
    assert!((scene.camera.aspect - 1600.0 / 900.0).abs() < 1e-6);
    assert_eq!((scene.viewport.width, scene.viewport.height), (1600, 900));
}

#[test]
fn resize_ignores_zero_sizes() {
    let mut scene = SceneContext::build(&ViewerConfig::static_globe(), &[], &mut rng());
    scene.resize(800, 600);
    assert!(!scene.resize(0, 600));
    assert!(!scene.resize(800, 0));
    assert_eq!((scene.viewport.width, scene.viewport.height), (800, 600));
}

#[test]
fn default_starfield_has_ten_thousand_points() {
    let scene = SceneContext::build(&ViewerConfig::static_globe(), &[], &mut rng());
    assert_eq!(scene.stars.len(), 10_000);
}

#[test]
fn starfield_policies_respect_their_bounds() {
    let half = STAR_EXTENT / 2.0;
    let full = generate_starfield(2000, STAR_EXTENT, StarfieldPolicy::FullVolume, &mut rng());
    assert!(full.iter().all(|p| p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half));
    assert!(full.iter().any(|p| p.z > 0.0));

    let far = generate_starfield(2000, STAR_EXTENT, StarfieldPolicy::FarHalf, &mut rng());
    assert!(far.iter().all(|p| p.z <= 0.0 && p.z >= -STAR_EXTENT));
    assert!(far.iter().all(|p| p.x.abs() <= half && p.y.abs() <= half));
}

#[test]
fn single_country_dataset_end_to_end() {
    let json = br#"[{"name":{"common":"India"},"population":1380000000,"latlng":[20.5937,78.9629]}]"#;
    let ds = parse_countries(json).unwrap();
    let scene = SceneContext::build(&ViewerConfig::population_bars(), &ds.records, &mut rng());
    assert_eq!(scene.markers.len(), 1);
    let m = &scene.markers.markers()[0];
    assert!((m.position - project(20.5937, 78.9629, 5.0)).length() < 1e-5);
    assert_eq!(m.country_name, "India");
    assert_eq!(m.formatted_population, "1,380,000,000");
}

#[test]
fn fixed_variant_uses_landmarks_and_marker_count_is_frozen() {
    let config = ViewerConfig::fixed_markers();
    let mut r = rng();
    let mut scene = SceneContext::build(&config, &[], &mut r);
    let n = scene.markers.len();
    assert!(n > 0);

    let more = parse_countries(
        br#"[{"name":{"common":"Chad"},"population":16425864,"latlng":[15.0,19.0]}]"#,
    )
    .unwrap();
    scene.populate(&config, &more.records, &mut r);
    assert_eq!(scene.markers.len(), n);
}

#[test]
fn static_variant_has_no_markers() {
    let scene = SceneContext::build(&ViewerConfig::static_globe(), &[], &mut rng());
    assert!(scene.markers.is_empty());
    assert!(scene.marker_instances(0.0).is_empty());
}

#[test]
fn marker_instances_carry_opacity_in_alpha() {
    let ds = parse_countries(
        br#"[{"name":{"common":"Chad"},"population":16425864,"latlng":[15.0,19.0]}]"#,
    )
    .unwrap();
    let mut scene = SceneContext::build(&ViewerConfig::population_bars(), &ds.records, &mut rng());
    scene.markers.set_opacity(0, 1.0);
    let inst = scene.marker_instances(0.0);
    assert_eq!(inst.len(), 1);
    assert_eq!(inst[0].color[3], 1.0);
}
