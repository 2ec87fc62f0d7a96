use globe_core::animation::{Ease, Pulse, Tween};
use globe_core::config::InteractionMode;
use globe_core::orbit::{OrbitControls, OrbitSettings};
use globe_core::pointer::{DragCell, PointerCell, PointerState};
use globe_core::{
    CountryRecord, FrameInput, InteractionController, SceneContext, Tooltip, ViewerConfig,
    MARKER_HOVER_OPACITY, MARKER_IDLE_OPACITY,
};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scene(config: &ViewerConfig) -> SceneContext {
    let mut c = config.clone();
    c.star_count = 0;
    SceneContext::build(&c, &[], &mut StdRng::seed_from_u64(5))
}

#[test]
fn tween_reaches_target_at_duration() {
    let mut t = Tween::new(Vec2::ZERO, 2.0, Ease::Power1Out);
    t.retarget(Vec2::new(1.0, -1.0));
    let mid = t.advance(1.0);
    assert!(mid.x > 0.5 && mid.x < 1.0, "ease-out should be past halfway: {mid:?}");
    let end = t.advance(1.0);
    assert!((end - Vec2::new(1.0, -1.0)).length() < 1e-6);
    assert!(t.is_finished());
    assert_eq!(t.advance(5.0), end);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut t = Tween::new(Vec2::ZERO, 2.0, Ease::Linear);
    t.retarget(Vec2::new(2.0, 0.0));
    let here = t.advance(1.0);
    assert!((here.x - 1.0).abs() < 1e-6);
    t.retarget(Vec2::new(-1.0, 0.0));
    assert!((t.value().x - 1.0).abs() < 1e-6, "no jump on retarget");
    let end = t.advance(2.0);
    assert!((end.x + 1.0).abs() < 1e-6);
}

#[test]
fn retarget_to_same_target_keeps_progress() {
    let mut t = Tween::new(Vec2::ZERO, 2.0, Ease::Linear);
    t.retarget(Vec2::ONE);
    t.advance(1.5);
    t.retarget(Vec2::ONE);
    let v = t.advance(0.5);
    assert!((v - Vec2::ONE).length() < 1e-6);
}

#[test]
fn pulse_yoyos_between_rest_and_peak() {
    let p = Pulse {
        delay: 0.5,
        half_period: 2.0,
        peak: 1.4,
    };
    assert_eq!(p.value_at(0.0), 1.0);
    assert!((p.value_at(0.5 + 1.0) - 1.2).abs() < 1e-5);
    assert!((p.value_at(0.5 + 1.999) - 1.4).abs() < 1e-3);
    assert!((p.value_at(0.5 + 3.0) - 1.2).abs() < 1e-5);
    assert!((p.value_at(0.5 + 4.0) - 1.0).abs() < 1e-4);
    for i in 0..200 {
        let v = p.value_at(i as f32 * 0.137);
        assert!((1.0..=1.4 + 1e-6).contains(&v));
    }
}

#[test]
fn pointer_mode_follows_pointer_and_spins() {
    let config = ViewerConfig::static_globe();
    let mut scene = scene(&config);
    let mut ctl = InteractionController::new(config.mode, config.idle_spin, &scene);
    let input = FrameInput {
        pointer: Some(PointerState {
            normalized_x: 1.0,
            normalized_y: -1.0,
        }),
        ..Default::default()
    };
    let mut out = None;
    for _ in 0..150 {
        out = ctl.update(&mut scene, input, 1.0 / 60.0, 0.0);
    }
    assert!(out.is_none());
    assert!((scene.group.y - 0.5).abs() < 1e-4, "yaw {}", scene.group.y);
    assert!((scene.group.x - 0.5).abs() < 1e-4, "tilt {}", scene.group.x);
    assert!((scene.group.spin - 150.0 * config.idle_spin).abs() < 1e-4);
}

#[test]
fn strong_sensitivity_scales_target() {
    let config = ViewerConfig::fixed_markers();
    let mut scene = scene(&config);
    let mut ctl = InteractionController::new(config.mode, 0.0, &scene);
    let input = FrameInput {
        pointer: Some(PointerState {
            normalized_x: 0.5,
            normalized_y: 0.0,
        }),
        ..Default::default()
    };
    for _ in 0..3 {
        ctl.update(&mut scene, input, 1.0, 0.0);
    }
    assert!((scene.group.y - 0.75).abs() < 1e-5);
    assert_eq!(scene.group.spin, 0.0);
}

#[test]
fn orbit_mode_returns_tooltip_and_keeps_distance() {
    let config = ViewerConfig::population_bars();
    let mut scene = scene(&config);
    let mut ctl = InteractionController::new(config.mode, 0.0, &scene);
    assert!(matches!(ctl.mode(), InteractionMode::Orbit(_)));
    let input = FrameInput {
        drag_px: Vec2::new(120.0, 40.0),
        viewport_height: 800.0,
        ..Default::default()
    };
    let tip = ctl.update(&mut scene, input, 1.0 / 60.0, 0.0);
    assert_eq!(tip, Some(Tooltip::Hidden));
    assert!((scene.camera.eye.length() - 15.0).abs() < 1e-3);
    assert!(scene.camera.eye.x < 0.0, "dragging right swings the eye west");
}

#[test]
fn orbit_mode_without_pointer_highlights_nothing() {
    let mut config = ViewerConfig::population_bars();
    config.star_count = 0;
    let records = [CountryRecord::new("Gulf", 50_000_000, 0.0, 0.0)];
    let mut scene = SceneContext::build(&config, &records, &mut StdRng::seed_from_u64(5));
    let mut ctl = InteractionController::new(config.mode, 0.0, &scene);

    // marker sits dead centre, but no pointer event has arrived yet
    let idle = FrameInput::default();
    assert_eq!(ctl.update(&mut scene, idle, 1.0 / 60.0, 0.0), Some(Tooltip::Hidden));
    assert_eq!(scene.markers.opacity(0), MARKER_IDLE_OPACITY);

    let cell = PointerCell::default();
    cell.set(PointerState::from_client(50.0, 50.0, 100.0, 100.0));
    let hover = FrameInput {
        pointer: cell.get(),
        ..Default::default()
    };
    assert_eq!(
        ctl.update(&mut scene, hover, 1.0 / 60.0, 0.0),
        Some(Tooltip::Shown {
            label: "Gulf".into(),
            value: "50,000,000".into()
        })
    );
    assert_eq!(scene.markers.opacity(0), MARKER_HOVER_OPACITY);

    // pointer leaves the window
    cell.clear();
    let gone = FrameInput {
        pointer: cell.get(),
        ..Default::default()
    };
    assert_eq!(ctl.update(&mut scene, gone, 1.0 / 60.0, 0.0), Some(Tooltip::Hidden));
    assert_eq!(scene.markers.opacity(0), MARKER_IDLE_OPACITY);
}

#[test]
fn orbit_damping_settles() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 15.0), Vec3::ZERO, OrbitSettings::default());
    orbit.drag(Vec2::new(200.0, 0.0), 800.0);
    let first = orbit.update();
    let mut last = first;
    for _ in 0..600 {
        last = orbit.update();
    }
    assert!(orbit.is_settled());
    // Damped: the first step applies only a fraction of the total turn.
    let first_angle = first.x.atan2(first.z).abs();
    let total_angle = last.x.atan2(last.z).abs();
    assert!(first_angle < total_angle * 0.1);
    let expected = 2.0 * std::f32::consts::PI * 0.4 * 200.0 / 800.0;
    assert!((total_angle - expected).abs() < 1e-2, "{total_angle} vs {expected}");
}

#[test]
fn orbit_without_damping_applies_immediately() {
    let settings = OrbitSettings {
        damping: None,
        rotate_speed: 1.0,
    };
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, settings);
    orbit.drag(Vec2::new(100.0, 0.0), 400.0);
    let eye = orbit.update();
    assert!(orbit.is_settled());
    assert!((eye.x + 10.0).abs() < 1e-3, "quarter turn west: {eye:?}");
}

#[test]
fn orbit_polar_angle_is_clamped() {
    let mut orbit = OrbitControls::new(Vec3::new(0.0, 0.0, 15.0), Vec3::ZERO, OrbitSettings {
        damping: None,
        rotate_speed: 1.0,
    });
    orbit.drag(Vec2::new(0.0, 10_000.0), 100.0);
    let eye = orbit.update();
    assert!(eye.y <= 15.0 && eye.y > 14.99);
    assert!((eye.length() - 15.0).abs() < 1e-3);
}

#[test]
fn pointer_cell_keeps_latest_value() {
    let cell = PointerCell::default();
    let writer = cell.clone();
    writer.set(PointerState::from_client(0.0, 0.0, 200.0, 100.0));
    writer.set(PointerState::from_client(200.0, 100.0, 200.0, 100.0));
    assert_eq!(
        cell.get(),
        Some(PointerState {
            normalized_x: 1.0,
            normalized_y: -1.0
        })
    );
    writer.clear();
    assert_eq!(cell.get(), None);
}

#[test]
fn pointer_normalization_is_ndc() {
    let p = PointerState::from_client(50.0, 25.0, 100.0, 100.0);
    assert_eq!(p.normalized_x, 0.0);
    assert_eq!(p.normalized_y, 0.5);
    assert_eq!(PointerState::from_client(5.0, 5.0, 0.0, 10.0), PointerState::default());
}

#[test]
fn drag_cell_only_accumulates_while_active() {
    let drag = DragCell::default();
    drag.push(10.0, 5.0);
    assert_eq!(drag.take(), Vec2::ZERO);
    drag.begin();
    drag.push(10.0, 5.0);
    drag.push(-4.0, 1.0);
    assert_eq!(drag.take(), Vec2::new(6.0, 6.0));
    assert_eq!(drag.take(), Vec2::ZERO);
    drag.end();
    assert!(!drag.is_active());
}
