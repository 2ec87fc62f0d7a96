// Shared scene/interaction tuning constants used by the web frontend and tests.

// Globe layout
pub const GLOBE_RADIUS: f32 = 5.0; // world units
pub const GLOBE_SEGMENTS: u32 = 50; // width and height segments of the UV sphere
pub const ATMOSPHERE_SCALE: f32 = 1.2; // atmosphere shell radius relative to the globe
pub const SURFACE_YAW: f32 = -std::f32::consts::FRAC_PI_2; // aligns texture seam with lng 0

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Starfield
pub const STAR_COUNT: usize = 10_000;
pub const STAR_EXTENT: f32 = 2000.0; // edge length of the star cube

// Markers
pub const MARKER_MIN_SIZE: f32 = 0.1; // floor for every box dimension
pub const MARKER_BASE_FOOTPRINT: f32 = 0.2; // footprint at 1e9 population
pub const MARKER_BASE_DEPTH: f32 = 0.8; // extrusion at 1e9 population
pub const MARKER_JITTER_MAX: f32 = 0.4; // upper bound of the random depth floor
pub const POPULATION_UNIT: f64 = 1e9;
pub const MARKER_COLOR: [f32; 3] = [0.231, 0.969, 1.0]; // #3BF7FF

// Hover opacity
pub const MARKER_IDLE_OPACITY: f32 = 0.4;
pub const MARKER_HOVER_OPACITY: f32 = 1.0;

// Marker pulse (yoyo on the extrusion axis)
pub const PULSE_PEAK_SCALE: f32 = 1.4;
pub const PULSE_HALF_PERIOD_SEC: f32 = 2.0;
pub const PULSE_MAX_DELAY_SEC: f32 = 1.0;

// Pointer-reactive rotation
pub const POINTER_SENSITIVITY: f32 = 0.5;
pub const POINTER_SENSITIVITY_STRONG: f32 = 1.5;
pub const ROTATION_TWEEN_SEC: f32 = 2.0;
pub const IDLE_SPIN_PER_FRAME: f32 = 0.002; // radians added to group yaw each frame

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 0.4;
pub const ORBIT_POLAR_EPS: f32 = 1e-6;
