use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest accepted `area_per_particle`. Below this a full screen surface
/// holds tens of thousands of particles and the pair scan stalls each frame.
pub const MIN_AREA_PER_PARTICLE: f32 = 100.0;

/// Tunables for the particle field. Every field has a default, so a config
/// file only needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Surface area covered by one particle; count = floor(area / this).
    pub area_per_particle: f32,
    /// Upper bound on each velocity component, in units per frame.
    pub max_speed: f32,
    pub min_radius: f32,
    /// Exclusive.
    pub max_radius: f32,
    pub link_distance: f32,
    pub link_opacity: f32,
    pub link_width: f32,
    pub pointer_radius: f32,
    pub pointer_opacity: f32,
    pub pointer_width: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 10_000.0,
            max_speed: 0.5,
            min_radius: 1.0,
            max_radius: 3.0,
            link_distance: 100.0,
            link_opacity: 0.5,
            link_width: 1.0,
            pointer_radius: 150.0,
            pointer_opacity: 0.8,
            pointer_width: 1.5,
        }
    }
}

impl FieldConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let unit = |v: f32| (0.0..=1.0).contains(&v);

        if !(self.area_per_particle.is_finite() && self.area_per_particle >= MIN_AREA_PER_PARTICLE) {
            return Err(ConfigError::Invalid("area_per_particle must be at least 100"));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(ConfigError::Invalid("max_speed must not be negative"));
        }
        if !positive(self.min_radius) || !(self.max_radius.is_finite() && self.max_radius > self.min_radius) {
            return Err(ConfigError::Invalid("radius range must be positive and non-empty"));
        }
        if !positive(self.link_distance) || !positive(self.pointer_radius) {
            return Err(ConfigError::Invalid("link_distance and pointer_radius must be positive"));
        }
        if !unit(self.link_opacity) || !unit(self.pointer_opacity) {
            return Err(ConfigError::Invalid("opacities must lie in [0, 1]"));
        }
        if !positive(self.link_width) || !positive(self.pointer_width) {
            return Err(ConfigError::Invalid("line widths must be positive"));
        }
        Ok(())
    }
}
