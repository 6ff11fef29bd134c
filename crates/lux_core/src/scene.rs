//! Scene configuration: camera, lights, ambient light and material.
//!
//! Everything here is plain immutable data consumed by the renderer. The
//! defaults reproduce the stock scene: a perspective camera at `z = 2`
//! looking down `-z`, seven white point lights alternating above and below
//! the model, and a green-tinted Blinn-Phong material.
//!
//! Configs are read from JSON. Every field is optional and falls back to
//! its default, so a file only needs to list what it overrides:
//!
//! ```json
//! {
//!   "camera": { "projection": "orthographic", "width": 320, "height": 240 },
//!   "lights": [ { "position": [0, 4, 4], "color": [10, 10, 10, 0] } ]
//! }
//! ```

use std::path::Path;

use lux_math::{DVec3, DVec4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color, linear and unclamped. Alpha is ignored by lighting terms.
pub type Color = DVec4;

/// Errors that can occur while loading a scene config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Camera projection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// All rays start at the camera position.
    #[default]
    Perspective,
    /// Rays start on the sensor and travel along `-z`.
    Orthographic,
}

/// Camera and output resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera center
    pub position: DVec3,
    /// Distance from the camera center to the sensor plane
    pub focal_length: f64,
    /// Vertical field of view in radians
    pub field_of_view: f64,
    pub projection: Projection,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 2.0),
            focal_length: 2.0,
            field_of_view: 0.7854, // 45 degrees
            projection: Projection::Perspective,
            width: 640,
            height: 480,
        }
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: DVec3,
    /// Radiant intensity per channel (alpha unused)
    pub color: Color,
}

impl Light {
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Blinn-Phong material shared by the whole mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub specular_exponent: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::new(0.0, 0.5, 0.0, 0.0),
            diffuse: Color::new(0.5, 0.5, 0.5, 0.0),
            specular: Color::new(0.2, 0.2, 0.2, 0.0),
            specular_exponent: 256.0,
        }
    }
}

/// Full scene description consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub lights: Vec<Light>,
    /// Global ambient light, multiplied with the material's ambient color
    pub ambient_light: Color,
    pub material: Material,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let white = Color::new(16.0, 16.0, 16.0, 0.0);
        let lights = [
            (8.0, 8.0),
            (6.0, -8.0),
            (4.0, 8.0),
            (2.0, -8.0),
            (0.0, 8.0),
            (-2.0, -8.0),
            (-4.0, 8.0),
        ]
        .into_iter()
        .map(|(x, y)| Light::new(DVec3::new(x, y, 0.0), white))
        .collect();

        Self {
            camera: CameraConfig::default(),
            lights,
            ambient_light: Color::new(0.2, 0.2, 0.2, 0.0),
            material: Material::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::info!("Loading scene config: {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
