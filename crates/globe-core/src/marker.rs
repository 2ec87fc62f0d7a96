use crate::constants::*;
use crate::dataset::CountryRecord;
use crate::projection::project;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

/// A population bar standing on the globe surface.
///
/// `position` is the base of the box on the sphere; the box extends
/// outward from there along its local -Z axis after `orientation` (which
/// points local +Z at the globe centre) is applied.
#[derive(Clone, Debug)]
pub struct Marker {
    pub position: Vec3,
    /// Box dimensions: footprint in x/y, extrusion in z.
    pub scale: Vec3,
    pub orientation: Quat,
    pub country_name: String,
    pub formatted_population: String,
}

impl Marker {
    /// Local-to-group transform mapping the unit cube `[-0.5, 0.5]^3` onto
    /// the box. `extrusion` stretches depth about the base (1.0 at rest).
    pub fn model_matrix(&self, extrusion: f32) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            * Mat4::from_scale(Vec3::new(1.0, 1.0, extrusion))
            * Mat4::from_translation(Vec3::new(0.0, 0.0, -self.scale.z * 0.5))
            * Mat4::from_scale(self.scale)
    }
}

/// Build the marker for one record. The RNG only feeds the depth jitter.
pub fn build_marker<R: Rng>(record: &CountryRecord, sphere_radius: f32, rng: &mut R) -> Marker {
    let scale = (record.population as f64 / POPULATION_UNIT) as f32;
    let footprint = (MARKER_BASE_FOOTPRINT * scale).max(MARKER_MIN_SIZE);
    let jitter = rng.gen_range(MARKER_MIN_SIZE..MARKER_JITTER_MAX);
    let depth = (MARKER_BASE_DEPTH * scale).max(jitter);

    let (lat, lng) = record.latlng;
    let position = project(lat, lng, sphere_radius);
    let inward = (-position).normalize_or_zero();
    let orientation = if inward == Vec3::ZERO {
        Quat::IDENTITY
    } else {
        Quat::from_rotation_arc(Vec3::Z, inward)
    };

    Marker {
        position,
        scale: Vec3::new(footprint, footprint, depth),
        orientation,
        country_name: record.name.clone(),
        formatted_population: format_population(record.population),
    }
}

/// Group a count with commas every three digits, en-US style.
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The interactable registry: every marker in the scene and its current
/// opacity. Populated once at scene build, never resized afterwards.
#[derive(Clone, Debug, Default)]
pub struct MarkerGroup {
    markers: Vec<Marker>,
    opacity: Vec<f32>,
}

impl MarkerGroup {
    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
        self.opacity.push(MARKER_IDLE_OPACITY);
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }

    pub fn opacity(&self, index: usize) -> f32 {
        self.opacity.get(index).copied().unwrap_or(MARKER_IDLE_OPACITY)
    }

    pub fn set_opacity(&mut self, index: usize, value: f32) {
        if let Some(o) = self.opacity.get_mut(index) {
            *o = value;
        }
    }

    pub fn reset_opacity(&mut self) {
        self.opacity.fill(MARKER_IDLE_OPACITY);
    }
}

/// Per-instance GPU data for the marker pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MarkerInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_handles_short_and_exact_multiples() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(123456), "123,456");
        assert_eq!(format_population(1234567), "1,234,567");
    }

    #[test]
    fn opacity_defaults_to_idle() {
        let mut g = MarkerGroup::default();
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        g.push(build_marker(&CountryRecord::new("X", 1, 0.0, 0.0), 5.0, &mut rng));
        assert_eq!(g.opacity(0), MARKER_IDLE_OPACITY);
        g.set_opacity(0, 1.0);
        g.reset_opacity();
        assert_eq!(g.opacity(0), MARKER_IDLE_OPACITY);
    }
}
