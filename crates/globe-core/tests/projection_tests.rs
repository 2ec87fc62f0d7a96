use globe_core::project;
use glam::Vec3;

#[test]
fn projection_lies_on_sphere_over_full_range() {
    let radius = 5.0;
    let mut lat = -90.0;
    while lat <= 90.0 {
        let mut lng = -180.0;
        while lng <= 180.0 {
            let p = project(lat, lng, radius);
            assert!(
                (p.length() - radius).abs() < 1e-4,
                "({lat}, {lng}) -> {p:?} is off the sphere"
            );
            lng += 7.5;
        }
        lat += 7.5;
    }
}

#[test]
fn equator_prime_meridian_faces_camera() {
    let r = 5.0;
    let p = project(0.0, 0.0, r);
    assert!((p - Vec3::new(0.0, 0.0, r)).length() < 1e-5);
}

#[test]
fn north_pole_is_up() {
    let r = 5.0;
    let p = project(90.0, 0.0, r);
    assert!((p - Vec3::new(0.0, r, 0.0)).length() < 1e-5);
}

#[test]
fn east_longitudes_move_towards_positive_x() {
    let p = project(0.0, 90.0, 1.0);
    assert!((p - Vec3::X).length() < 1e-5);
    let q = project(0.0, -90.0, 1.0);
    assert!((q + Vec3::X).length() < 1e-5);
}

#[test]
fn out_of_range_input_wraps() {
    let a = project(10.0, 200.0, 3.0);
    let b = project(10.0, -160.0, 3.0);
    assert!((a - b).length() < 1e-4);
}
