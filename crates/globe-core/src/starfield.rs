use crate::error::GlobeError;
use glam::Vec3;
use rand::Rng;
use std::str::FromStr;

/// Where the backdrop stars are scattered, relative to a camera looking down -Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StarfieldPolicy {
    /// A cube centred on the origin; stars surround the camera.
    FullVolume,
    /// Only the half-space in front of the camera (z <= 0), behind the globe.
    #[default]
    FarHalf,
}

impl FromStr for StarfieldPolicy {
    type Err = GlobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "full-volume" => Ok(Self::FullVolume),
            "far" | "far-half" | "half" => Ok(Self::FarHalf),
            _ => Err(GlobeError::Config {
                key: "starfield".into(),
                value: s.into(),
            }),
        }
    }
}

/// Scatter `count` stars in a cube of edge `extent` according to `policy`.
pub fn generate_starfield<R: Rng>(
    count: usize,
    extent: f32,
    policy: StarfieldPolicy,
    rng: &mut R,
) -> Vec<Vec3> {
    let centred = |rng: &mut R| (rng.gen::<f32>() - 0.5) * extent;
    (0..count)
        .map(|_| {
            let x = centred(rng);
            let y = centred(rng);
            let z = match policy {
                StarfieldPolicy::FullVolume => centred(rng),
                StarfieldPolicy::FarHalf => -rng.gen::<f32>() * extent,
            };
            Vec3::new(x, y, z)
        })
        .collect()
}
