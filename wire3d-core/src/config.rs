/// Viewer configuration
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::projection::{Camera, Viewport};

/// How the Z rotation angle is normalized after a drag update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZWrapPolicy {
    /// Only negative angles are brought back into [0, 360); the angle may
    /// grow past 360.
    #[default]
    NegativeOnly,
    /// Wrap into [0, 360) like the X and Y angles.
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    /// Eye distance used by the perspective divisor
    pub eye_distance: f64,
    /// Half edge length of the cube
    pub cube_size: f64,
    pub axis_length: f64,
    /// Degrees of rotation per pixel of drag
    pub sensitivity: f64,
    /// Scale change per wheel step
    pub zoom_step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub initial_scale: f64,
    pub perspective: bool,
    pub z_wrap: ZWrapPolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            eye_distance: 300.0,
            cube_size: 100.0,
            axis_length: 150.0,
            sensitivity: 0.5,
            zoom_step: 0.1,
            min_scale: 0.1,
            max_scale: 3.0,
            initial_scale: 1.0,
            perspective: true,
            z_wrap: ZWrapPolicy::NegativeOnly,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 {
            return Err(ConfigError::invalid("width", "must be non-zero"));
        }
        if self.height == 0 {
            return Err(ConfigError::invalid("height", "must be non-zero"));
        }

        let positive = [
            ("eye_distance", self.eye_distance),
            ("cube_size", self.cube_size),
            ("axis_length", self.axis_length),
            ("sensitivity", self.sensitivity),
            ("zoom_step", self.zoom_step),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a positive finite number, got {value}"),
                ));
            }
        }

        if self.min_scale > self.max_scale {
            return Err(ConfigError::invalid(
                "min_scale",
                format!("{} exceeds max_scale {}", self.min_scale, self.max_scale),
            ));
        }
        if !(self.min_scale..=self.max_scale).contains(&self.initial_scale) {
            return Err(ConfigError::invalid(
                "initial_scale",
                format!(
                    "{} is outside [{}, {}]",
                    self.initial_scale, self.min_scale, self.max_scale
                ),
            ));
        }

        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn camera(&self) -> Camera {
        Camera::new(self.viewport(), self.eye_distance)
    }
}
