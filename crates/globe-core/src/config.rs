//! Viewer options.
//!
//! A [`ViewerConfig`] is fixed when the scene is built. Presets cover the
//! three variants of the globe; individual keys can be overridden from
//! string attributes (the web front-end reads `data-*` attributes of the
//! canvas).

use crate::constants::*;
use crate::error::{GlobeError, Result};
use crate::orbit::OrbitSettings;
use crate::starfield::StarfieldPolicy;

#[derive(Clone, Copy, Debug)]
pub enum InteractionMode {
    /// The group follows the pointer through an eased tween.
    PointerReactive { sensitivity: f32 },
    /// Drag orbits the camera; hovering markers shows the tooltip.
    Orbit(OrbitSettings),
}

impl InteractionMode {
    pub fn is_orbit(&self) -> bool {
        matches!(self, InteractionMode::Orbit(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MarkerSource {
    None,
    /// Built-in landmark list.
    Fixed,
    /// Country dataset fetched from a URL.
    Dataset(String),
}

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub mode: InteractionMode,
    pub starfield: StarfieldPolicy,
    pub star_count: usize,
    pub markers: MarkerSource,
    pub texture_url: Option<String>,
    /// Radians added to the group yaw every frame in pointer-reactive mode.
    pub idle_spin: f32,
    pub pulse_markers: bool,
}

pub const DEFAULT_TEXTURE_URL: &str = "assets/globe.jpg";
pub const DEFAULT_DATASET_URL: &str = "assets/countries.json";

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::population_bars()
    }
}

impl ViewerConfig {
    /// Textured globe, pointer tilt, idle spin.
    pub fn static_globe() -> Self {
        Self {
            mode: InteractionMode::PointerReactive {
                sensitivity: POINTER_SENSITIVITY,
            },
            starfield: StarfieldPolicy::FarHalf,
            star_count: STAR_COUNT,
            markers: MarkerSource::None,
            texture_url: Some(DEFAULT_TEXTURE_URL.into()),
            idle_spin: IDLE_SPIN_PER_FRAME,
            pulse_markers: false,
        }
    }

    /// Pulsing markers at fixed coordinates, stronger pointer follow.
    pub fn fixed_markers() -> Self {
        Self {
            mode: InteractionMode::PointerReactive {
                sensitivity: POINTER_SENSITIVITY_STRONG,
            },
            starfield: StarfieldPolicy::FullVolume,
            markers: MarkerSource::Fixed,
            idle_spin: 0.0,
            pulse_markers: true,
            ..Self::static_globe()
        }
    }

    /// Dataset-driven bars, orbit controls and hover tooltips.
    pub fn population_bars() -> Self {
        Self {
            mode: InteractionMode::Orbit(OrbitSettings::default()),
            starfield: StarfieldPolicy::FarHalf,
            markers: MarkerSource::Dataset(DEFAULT_DATASET_URL.into()),
            idle_spin: 0.0,
            pulse_markers: true,
            ..Self::static_globe()
        }
    }

    pub fn from_variant(name: &str) -> Result<Self> {
        match name.trim() {
            "1" | "static" => Ok(Self::static_globe()),
            "2" | "markers" => Ok(Self::fixed_markers()),
            "3" | "population" => Ok(Self::population_bars()),
            other => Err(config_error("variant", other)),
        }
    }

    /// Override one option from its string form.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "mode" => {
                self.mode = match value.trim() {
                    "orbit" => InteractionMode::Orbit(OrbitSettings::default()),
                    "pointer" => InteractionMode::PointerReactive {
                        sensitivity: POINTER_SENSITIVITY,
                    },
                    other => return Err(config_error(key, other)),
                }
            }
            "sensitivity" => {
                let k = parse_f32(key, value)?;
                self.mode = InteractionMode::PointerReactive { sensitivity: k };
            }
            "starfield" => self.starfield = value.parse()?,
            "stars" => {
                self.star_count = value
                    .trim()
                    .parse()
                    .map_err(|_| config_error(key, value))?
            }
            "dataset" => {
                self.markers = match value.trim() {
                    "" | "none" => MarkerSource::None,
                    "fixed" => MarkerSource::Fixed,
                    url => MarkerSource::Dataset(url.to_string()),
                }
            }
            "texture" => {
                self.texture_url = match value.trim() {
                    "" | "none" => None,
                    url => Some(url.to_string()),
                }
            }
            "spin" => self.idle_spin = parse_f32(key, value)?,
            "pulse" => {
                self.pulse_markers = match value.trim() {
                    "on" | "true" | "1" => true,
                    "off" | "false" | "0" => false,
                    other => return Err(config_error(key, other)),
                }
            }
            _ => return Err(config_error(key, value)),
        }
        Ok(())
    }
}

fn parse_f32(key: &str, value: &str) -> Result<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| config_error(key, value))
}

fn config_error(key: &str, value: &str) -> GlobeError {
    GlobeError::Config {
        key: key.to_string(),
        value: value.to_string(),
    }
}
