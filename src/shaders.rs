pub const GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub const ATMOSPHERE_WGSL: &str = include_str!("../shaders/atmosphere.wgsl");
pub const STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");
pub const MARKERS_WGSL: &str = include_str!("../shaders/markers.wgsl");
