//! Per-pixel ray casting and the image buffer.
//!
//! One primary ray per pixel: nearest hit, then local shading. No
//! secondary rays are traced.

use std::path::Path;
use std::sync::Arc;

use lux_core::{Light, Material, Mesh, SceneConfig};
use lux_math::Ray;
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{shade, Bvh, Camera, Color, Hittable};

/// Lighting inputs shared by every shaded pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Shading {
    pub lights: Vec<Light>,
    pub ambient_light: Color,
    pub material: Material,
}

impl Shading {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            lights: config.lights.clone(),
            ambient_light: config.ambient_light,
            material: config.material,
        }
    }
}

/// Immutable render context: acceleration structure, camera and lighting.
///
/// Built once at startup and passed by reference; nothing in it changes
/// while rendering, so it can be read from any number of threads.
pub struct Scene {
    pub bvh: Bvh,
    pub camera: Camera,
    pub shading: Shading,
}

impl Scene {
    /// Build the BVH for `mesh` and set up camera and lighting from `config`.
    pub fn new(mesh: Arc<Mesh>, config: &SceneConfig) -> Self {
        Self {
            bvh: Bvh::build(mesh),
            camera: Camera::from_config(&config.camera),
            shading: Shading::from_config(config),
        }
    }

    /// Render the full image.
    pub fn render(&self) -> ImageBuffer {
        render(&self.camera, &self.bvh, &self.shading)
    }
}

/// Compute the color seen by a ray: transparent black on a miss.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, shading: &Shading) -> Color {
    let hit = world.nearest_hit(ray);
    shade(
        ray,
        hit.as_ref(),
        &shading.lights,
        shading.ambient_light,
        &shading.material,
    )
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    shading: &Shading,
    x: u32,
    y: u32,
) -> Color {
    let ray = camera.get_ray(x, y);
    ray_color(&ray, world, shading)
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to 8-bit RGBA, clamping every channel.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |c: f64| (255.0 * clamp_01(c)).round() as u8;
    [
        to_byte(color.x),
        to_byte(color.y),
        to_byte(color.z),
        to_byte(color.w),
    ]
}

/// Float RGBA image, row-major with `y = 0` at the top.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.pixel_index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.pixel_index(x, y);
        self.pixels[index] = color;
    }

    /// Row-major offset of (x, y), computed in `usize` so large images
    /// cannot overflow.
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgba(*c)).collect()
    }

    /// Encode as PNG. Colors are clamped to [0, 1] here, not earlier.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

/// Render the entire image, buckets in parallel.
pub fn render(camera: &Camera, world: &dyn Hittable, shading: &Shading) -> ImageBuffer {
    let buckets = generate_buckets(camera.image_width, camera.image_height, DEFAULT_BUCKET_SIZE);
    log::debug!(
        "Rendering {}x{} in {} buckets",
        camera.image_width,
        camera.image_height,
        buckets.len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, camera, world, shading)))
        .collect();

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    for result in &results {
        image.write_bucket(result);
    }
    image
}
