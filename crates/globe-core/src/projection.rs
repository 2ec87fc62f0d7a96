use glam::Vec3;
use std::f64::consts::PI;

/// Project a latitude/longitude pair (degrees) onto a sphere centred at the origin.
///
/// Longitude 0 faces +Z, longitude 90 faces +X and the north pole is +Y.
/// Inputs outside the usual ranges wrap around the sphere.
#[inline]
pub fn project(latitude_deg: f64, longitude_deg: f64, radius: f32) -> Vec3 {
    let lat = latitude_deg / 180.0 * PI;
    let lng = longitude_deg / 180.0 * PI;
    let r = radius as f64;
    Vec3::new(
        (r * lat.cos() * lng.sin()) as f32,
        (r * lat.sin()) as f32,
        (r * lat.cos() * lng.cos()) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antimeridian_faces_negative_z() {
        let p = project(0.0, 180.0, 2.0);
        assert!((p - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn south_pole_is_negative_y() {
        let p = project(-90.0, 45.0, 3.0);
        assert!((p - Vec3::new(0.0, -3.0, 0.0)).length() < 1e-5);
    }
}
