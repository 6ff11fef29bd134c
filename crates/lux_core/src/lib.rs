//! Lux Core - Geometry store, mesh loading and scene configuration.
//!
//! This crate provides:
//!
//! - **Geometry**: `Mesh`, an immutable vertex/triangle store
//! - **OFF support**: parsing `.off` mesh files into a `Mesh`
//! - **Scene configuration**: camera, lights, ambient light and material,
//!   loadable from JSON
//!
//! # Example
//!
//! ```ignore
//! use lux_core::{load_off, SceneConfig};
//!
//! let mesh = load_off("dragon.off")?;
//! let config = SceneConfig::load("scene.json")?;
//! println!("Loaded {} triangles, {} lights",
//!     mesh.triangle_count(),
//!     config.lights.len());
//! ```

pub mod mesh;
pub mod off;
pub mod scene;

// Re-export commonly used types
pub use mesh::{Mesh, MeshError, MeshResult};
pub use off::{load_off, parse_off, OffError, OffResult};
pub use scene::{CameraConfig, Color, ConfigError, ConfigResult, Light, Material, Projection, SceneConfig};
