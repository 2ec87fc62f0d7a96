pub mod animation;
pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod marker;
pub mod orbit;
pub mod picking;
pub mod pointer;
pub mod projection;
pub mod scene;
pub mod starfield;
pub mod texture;

pub use camera::{Camera, Ray};
pub use config::{InteractionMode, MarkerSource, ViewerConfig};
pub use constants::*;
pub use dataset::{parse_countries, CountryRecord, Dataset};
pub use error::{DataValidationError, GlobeError};
pub use interaction::{FrameInput, InteractionController, Tooltip};
pub use marker::{build_marker, format_population, Marker, MarkerGroup, MarkerInstance};
pub use projection::project;
pub use scene::{SceneContext, Viewport};
pub use starfield::StarfieldPolicy;
