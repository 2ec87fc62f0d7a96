use crate::animation::{Ease, Tween};
use crate::config::InteractionMode;
use crate::constants::*;
use crate::orbit::OrbitControls;
use crate::picking::{intersect_markers, Hits};
use crate::pointer::PointerState;
use crate::scene::SceneContext;
use glam::Vec2;

/// What the tooltip overlay should show after a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Tooltip {
    Hidden,
    Shown { label: String, value: String },
}

/// Per-frame input sampled from the pointer/drag cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// `None` while no pointer is over the page.
    pub pointer: Option<PointerState>,
    /// Drag motion since the last frame, CSS pixels.
    pub drag_px: Vec2,
    /// Viewport height in CSS pixels, used to scale drags.
    pub viewport_height: f32,
}

pub struct InteractionController {
    mode: InteractionMode,
    rotation: Tween,
    orbit: Option<OrbitControls>,
    idle_spin: f32,
}

impl InteractionController {
    pub fn new(mode: InteractionMode, idle_spin: f32, scene: &SceneContext) -> Self {
        let orbit = match mode {
            InteractionMode::Orbit(settings) => Some(OrbitControls::new(
                scene.camera.eye,
                scene.camera.target,
                settings,
            )),
            InteractionMode::PointerReactive { .. } => None,
        };
        Self {
            mode,
            rotation: Tween::new(Vec2::ZERO, ROTATION_TWEEN_SEC, Ease::Power1Out),
            orbit,
            idle_spin,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Advance one frame. Returns the tooltip state in orbit mode; pointer
    /// mode has no tooltip and returns `None`.
    pub fn update(&mut self, scene: &mut SceneContext, input: FrameInput, dt_sec: f32, elapsed_sec: f32) -> Option<Tooltip> {
        match self.mode {
            InteractionMode::PointerReactive { sensitivity } => {
                // no pointer eases back to the rest pose
                let pointer = input.pointer.unwrap_or_default();
                self.follow_pointer(scene, pointer, sensitivity, dt_sec);
                None
            }
            InteractionMode::Orbit(_) => {
                if let Some(orbit) = &mut self.orbit {
                    if input.drag_px != Vec2::ZERO {
                        orbit.drag(input.drag_px, input.viewport_height);
                    }
                    scene.camera.eye = orbit.update();
                    scene.camera.target = orbit.target();
                }
                Some(hit_test(scene, input.pointer, elapsed_sec))
            }
        }
    }

    fn follow_pointer(&mut self, scene: &mut SceneContext, pointer: PointerState, k: f32, dt_sec: f32) {
        // Pointer below centre (negative NDC y) tilts the globe's top towards the viewer.
        let target = Vec2::new(-pointer.normalized_y * k, pointer.normalized_x * k);
        self.rotation.retarget(target);
        let r = self.rotation.advance(dt_sec);
        scene.group.x = r.x;
        scene.group.y = r.y;
        scene.group.spin += self.idle_spin;
    }
}

/// Reset marker opacities, cast the pointer ray and highlight every marker
/// it crosses. The tooltip reports the nearest one. Without a pointer
/// nothing is highlighted.
pub fn hit_test(scene: &mut SceneContext, pointer: Option<PointerState>, elapsed_sec: f32) -> Tooltip {
    scene.markers.reset_opacity();
    let Some(pointer) = pointer else {
        return Tooltip::Hidden;
    };
    if scene.markers.is_empty() {
        return Tooltip::Hidden;
    }
    let hits = pick(scene, pointer, elapsed_sec);
    let mut tooltip = Tooltip::Hidden;
    for hit in &hits {
        scene.markers.set_opacity(hit.index, MARKER_HOVER_OPACITY);
        if tooltip == Tooltip::Hidden {
            if let Some(m) = scene.markers.get(hit.index) {
                tooltip = Tooltip::Shown {
                    label: m.country_name.clone(),
                    value: m.formatted_population.clone(),
                };
            }
        }
    }
    tooltip
}

/// Markers under the pointer, nearest first.
pub fn pick(scene: &SceneContext, pointer: PointerState, elapsed_sec: f32) -> Hits {
    let ray = scene.camera.ray_through_ndc(pointer.ndc());
    intersect_markers(&ray, &scene.markers, scene.group_transform(), |i| {
        scene.marker_model(i, elapsed_sec)
    })
}
