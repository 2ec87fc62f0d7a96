use crate::constants::*;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug)]
pub struct OrbitSettings {
    /// Fraction of the pending rotation applied per update; `None` applies
    /// it all at once.
    pub damping: Option<f32>,
    pub rotate_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping: Some(ORBIT_DAMPING_FACTOR),
            rotate_speed: ORBIT_ROTATE_SPEED,
        }
    }
}

/// Drag-to-orbit camera rig around a fixed target. Rotation only: no pan,
/// no zoom. The radius stays at whatever the eye started with.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub settings: OrbitSettings,
    target: Vec3,
    radius: f32,
    /// Azimuth around +Y, 0 on the +Z axis.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3, settings: OrbitSettings) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(1e-4);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            settings,
            target,
            radius,
            theta,
            phi,
            pending_theta: 0.0,
            pending_phi: 0.0,
        }
    }

    /// Feed a pointer drag in CSS pixels. A drag across the full viewport
    /// height turns the globe by `2π * rotate_speed`.
    pub fn drag(&mut self, delta_px: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let k = 2.0 * PI * self.settings.rotate_speed / h;
        self.pending_theta -= delta_px.x * k;
        self.pending_phi -= delta_px.y * k;
    }

    /// Apply (part of) the pending rotation and return the new eye position.
    pub fn update(&mut self) -> Vec3 {
        match self.settings.damping {
            Some(f) => {
                self.theta += self.pending_theta * f;
                self.phi += self.pending_phi * f;
                self.pending_theta *= 1.0 - f;
                self.pending_phi *= 1.0 - f;
            }
            None => {
                self.theta += self.pending_theta;
                self.phi += self.pending_phi;
                self.pending_theta = 0.0;
                self.pending_phi = 0.0;
            }
        }
        self.phi = self.phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);
        self.eye()
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * s * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * s * self.theta.cos(),
            )
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// True when no drag momentum is left to apply.
    pub fn is_settled(&self) -> bool {
        self.pending_theta.abs() < 1e-5 && self.pending_phi.abs() < 1e-5
    }
}
