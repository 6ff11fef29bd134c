//! Lux Renderer - BVH-accelerated ray casting for triangle meshes.
//!
//! Builds a bounding volume hierarchy over a static mesh once, then casts
//! one primary ray per pixel: nearest hit through the BVH, Blinn-Phong
//! shading over a list of point lights. No shadows or secondary bounces.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lux_core::{load_off, SceneConfig};
//! use lux_renderer::Scene;
//!
//! let mesh = Arc::new(load_off("bunny.off")?);
//! let scene = Scene::new(mesh, &SceneConfig::default());
//! scene.render().save_png("raytrace.png")?;
//! ```

mod bucket;
mod bvh;
mod camera;
mod hittable;
mod renderer;
mod shading;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use bvh::{Bvh, BvhNode, NodeIndex, NodeKind, TraversalStats, TriangleIndex};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, TriangleList};
pub use renderer::{color_to_rgba, ray_color, render, render_pixel, ImageBuffer, Scene, Shading};
pub use shading::{shade, MIN_LIGHT_DISTANCE_SQUARED};
pub use triangle::{intersect_triangle, TriangleHit, DETERMINANT_EPSILON};

/// Re-export scene types and math from the lower crates
pub use lux_core::{Color, Light, Material, Mesh, Projection, SceneConfig};
pub use lux_math::{Aabb, DVec3, Ray};
