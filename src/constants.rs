/// Page wiring: element ids, attribute names and overlay placement.
///
/// The page provides a canvas and a tooltip with two text slots; everything
/// else is read from `data-*` attributes on the canvas.
pub const CANVAS_ID: &str = "globe-canvas";
pub const TOOLTIP_ID: &str = "tooltip";
pub const TOOLTIP_LABEL_ID: &str = "tooltip-label";
pub const TOOLTIP_VALUE_ID: &str = "tooltip-value";

// Canvas attribute holding the preset; the rest override single keys.
pub const VARIANT_ATTR: &str = "data-variant";
pub const OVERRIDE_ATTRS: [(&str, &str); 8] = [
    ("data-mode", "mode"),
    ("data-starfield", "starfield"),
    ("data-stars", "stars"),
    ("data-sensitivity", "sensitivity"),
    ("data-dataset", "dataset"),
    ("data-texture", "texture"),
    ("data-spin", "spin"),
    ("data-pulse", "pulse"),
];

// Tooltip sits below-right of the cursor (CSS px)
pub const TOOLTIP_OFFSET_X: f32 = 10.0;
pub const TOOLTIP_OFFSET_Y: f32 = 10.0;
// Keep this much of the tooltip on screen when near the right/bottom edge
pub const TOOLTIP_EDGE_MARGIN: f32 = 8.0;

// Backing store sizing: device pixel ratio cap and the largest edge a
// surface texture may have under default WebGPU limits
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MAX_BACKING_DIM: u32 = 8192;
