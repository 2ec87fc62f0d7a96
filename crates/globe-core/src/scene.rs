//! Scene composition.
//!
//! [`SceneContext`] owns everything one viewer draws and interacts with:
//! camera, viewport, the rotating group (globe + markers), the atmosphere
//! shell and the starfield. It is built once and handed to the interaction
//! controller and the renderer; nothing here is global, so several viewers
//! can coexist.

use crate::animation::Pulse;
use crate::camera::Camera;
use crate::config::{MarkerSource, ViewerConfig};
use crate::constants::*;
use crate::dataset::{fixed_landmarks, CountryRecord};
use crate::marker::{build_marker, MarkerGroup, MarkerInstance};
use crate::starfield::generate_starfield;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

/// Rotation applied to the group holding the globe and the markers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupRotation {
    /// Tilt about X (radians).
    pub x: f32,
    /// Yaw about Y (radians).
    pub y: f32,
    /// Accumulated idle spin, added to `y`.
    pub spin: f32,
}

impl GroupRotation {
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.x, self.y + self.spin, 0.0)
    }
}

pub struct SceneContext {
    pub camera: Camera,
    pub viewport: Viewport,
    pub group: GroupRotation,
    pub markers: MarkerGroup,
    pulses: Vec<Pulse>,
    pub stars: Vec<Vec3>,
    pub globe_radius: f32,
}

impl SceneContext {
    /// Assemble the scene. `records` feeds the marker group; the marker
    /// source in `config` only matters to callers deciding what to load.
    pub fn build<R: Rng>(config: &ViewerConfig, records: &[CountryRecord], rng: &mut R) -> Self {
        let stars = generate_starfield(config.star_count, STAR_EXTENT, config.starfield, rng);
        let mut scene = Self {
            camera: Camera::default(),
            viewport: Viewport::default(),
            group: GroupRotation::default(),
            markers: MarkerGroup::default(),
            pulses: Vec::new(),
            stars,
            globe_radius: GLOBE_RADIUS,
        };
        scene.populate(config, records, rng);
        log::info!(
            "[scene] stars={} markers={} starfield={:?}",
            scene.stars.len(),
            scene.markers.len(),
            config.starfield
        );
        scene
    }

    /// Fill the marker group. Only valid while it is still empty: marker
    /// count is fixed once populated.
    pub fn populate<R: Rng>(&mut self, config: &ViewerConfig, records: &[CountryRecord], rng: &mut R) {
        if !self.markers.is_empty() {
            log::warn!("[scene] marker group already populated; ignoring {} records", records.len());
            return;
        }
        let fixed;
        let records = match (&config.markers, records.is_empty()) {
            (MarkerSource::Fixed, true) => {
                fixed = fixed_landmarks();
                fixed.as_slice()
            }
            _ => records,
        };
        for record in records {
            self.markers.push(build_marker(record, self.globe_radius, rng));
            let delay = if config.pulse_markers {
                rng.gen_range(0.0..PULSE_MAX_DELAY_SEC)
            } else {
                0.0
            };
            self.pulses.push(Pulse {
                delay,
                half_period: if config.pulse_markers {
                    PULSE_HALF_PERIOD_SEC
                } else {
                    0.0
                },
                peak: PULSE_PEAK_SCALE,
            });
        }
    }

    /// Update the projection aspect and the output size. Zero sizes are
    /// ignored. Returns whether anything changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let next = Viewport { width, height };
        if next == self.viewport {
            return false;
        }
        self.viewport = next;
        self.camera.aspect = width as f32 / height as f32;
        true
    }

    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_quat(self.group.quat())
    }

    pub fn globe_model(&self) -> Mat4 {
        self.group_transform() * Mat4::from_rotation_y(SURFACE_YAW)
    }

    /// The atmosphere sits outside the rotating group.
    pub fn atmosphere_model(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(ATMOSPHERE_SCALE))
    }

    pub fn extrusion(&self, index: usize, elapsed_sec: f32) -> f32 {
        self.pulses
            .get(index)
            .map(|p| p.value_at(elapsed_sec))
            .unwrap_or(1.0)
    }

    /// Marker box in group space at `elapsed_sec`.
    pub fn marker_model(&self, index: usize, elapsed_sec: f32) -> Mat4 {
        match self.markers.get(index) {
            Some(m) => m.model_matrix(self.extrusion(index, elapsed_sec)),
            None => Mat4::IDENTITY,
        }
    }

    pub fn marker_instances(&self, elapsed_sec: f32) -> Vec<MarkerInstance> {
        let group = self.group_transform();
        (0..self.markers.len())
            .map(|i| MarkerInstance {
                model: (group * self.marker_model(i, elapsed_sec)).to_cols_array_2d(),
                color: [
                    MARKER_COLOR[0],
                    MARKER_COLOR[1],
                    MARKER_COLOR[2],
                    self.markers.opacity(i),
                ],
            })
            .collect()
    }
}
