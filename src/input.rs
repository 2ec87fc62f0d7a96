use crate::constants::*;
use glam::Vec2;
use globe_core::pointer::PointerState;
use globe_core::ViewerConfig;

/// Canvas bounding box in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[inline]
pub fn canvas_local(client_x: f32, client_y: f32, rect: CanvasRect) -> Vec2 {
    Vec2::new(client_x - rect.left, client_y - rect.top)
}

/// Pointer state for a client position, relative to the canvas box.
#[inline]
pub fn pointer_from_client(client_x: f32, client_y: f32, rect: CanvasRect) -> PointerState {
    let local = canvas_local(client_x, client_y, rect);
    PointerState::from_client(local.x, local.y, rect.width, rect.height)
}

/// Canvas backing size in device pixels for a CSS box. The pixel ratio is
/// capped at `MAX_PIXEL_RATIO`; a box still larger than `max_dim` on either
/// edge is scaled down uniformly. Never below 1x1.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64, max_dim: u32) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    };
    let max = max_dim.max(1);
    let mut w = css_width.max(0.0) * dpr;
    let mut h = css_height.max(0.0) * dpr;
    let largest = w.max(h);
    if largest > max as f64 {
        let k = max as f64 / largest;
        w *= k;
        h *= k;
    }
    ((w.round() as u32).clamp(1, max), (h.round() as u32).clamp(1, max))
}

/// Top-left corner for the tooltip: `TOOLTIP_OFFSET_X/Y` below-right of the
/// cursor. Only when that would overflow a known window size does it flip to
/// the other side of the cursor on the overflowing axis.
pub fn tooltip_position(
    client_x: f32,
    client_y: f32,
    tip_size: Vec2,
    window_size: Vec2,
) -> Vec2 {
    let mut x = client_x + TOOLTIP_OFFSET_X;
    let mut y = client_y + TOOLTIP_OFFSET_Y;
    if window_size.x > 0.0 && x + tip_size.x + TOOLTIP_EDGE_MARGIN > window_size.x {
        x = (client_x - TOOLTIP_OFFSET_X - tip_size.x).max(0.0);
    }
    if window_size.y > 0.0 && y + tip_size.y + TOOLTIP_EDGE_MARGIN > window_size.y {
        y = (client_y - TOOLTIP_OFFSET_Y - tip_size.y).max(0.0);
    }
    Vec2::new(x, y)
}

/// Build the viewer options from canvas attributes. Unknown presets and
/// rejected overrides are logged and skipped.
pub fn read_config(attr: impl Fn(&str) -> Option<String>) -> ViewerConfig {
    let mut config = match attr(VARIANT_ATTR) {
        Some(v) => ViewerConfig::from_variant(&v).unwrap_or_else(|e| {
            log::warn!("[config] {e}; using default preset");
            ViewerConfig::default()
        }),
        None => ViewerConfig::default(),
    };
    for (name, key) in OVERRIDE_ATTRS {
        if let Some(value) = attr(name) {
            if let Err(e) = config.apply(key, &value) {
                log::warn!("[config] ignoring {name}: {e}");
            }
        }
    }
    config
}
