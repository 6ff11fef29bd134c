//! Camera for ray generation.
//!
//! The camera always looks down `-z`. A sensor grid sits `focal_length` in
//! front of the camera center and spans the vertical field of view; pixel
//! `(x, y)` maps to the center of its sensor cell, with `y` growing
//! downward.

use lux_core::{CameraConfig, Projection};
use lux_math::{DVec3, Ray};

/// Camera for generating one ray per pixel.
#[derive(Clone, Debug)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    position: DVec3,
    projection: Projection,

    // Lens settings
    focal_length: f64,
    field_of_view: f64, // Vertical, in radians

    // Cached computed values (set by initialize())
    sensor_origin: DVec3,
    pixel_delta_x: DVec3,
    pixel_delta_y: DVec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::from_config(&CameraConfig::default())
    }

    /// Create an initialized camera from scene configuration.
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            image_width: config.width,
            image_height: config.height,
            position: config.position,
            projection: config.projection,
            focal_length: config.focal_length,
            field_of_view: config.field_of_view,
            sensor_origin: DVec3::ZERO,
            pixel_delta_x: DVec3::ZERO,
            pixel_delta_y: DVec3::ZERO,
        };
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, focal_length: f64, field_of_view: f64) -> Self {
        self.focal_length = focal_length;
        self.field_of_view = field_of_view;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Projection used by [`Camera::get_ray`].
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Recompute the sensor grid. Call after any `with_*` setter.
    pub fn initialize(&mut self) {
        let width = self.image_width.max(1) as f64;
        let height = self.image_height.max(1) as f64;
        let aspect_ratio = width / height;

        let half_height = (self.field_of_view / 2.0).tan() * self.focal_length;
        let half_width = aspect_ratio * half_height;

        self.sensor_origin = self.position + DVec3::new(-half_width, half_height, -self.focal_length);
        self.pixel_delta_x = DVec3::new(2.0 * half_width / width, 0.0, 0.0);
        self.pixel_delta_y = DVec3::new(0.0, -2.0 * half_height / height, 0.0);
    }

    /// World-space center of pixel `(x, y)` on the sensor.
    pub fn pixel_center(&self, x: u32, y: u32) -> DVec3 {
        self.sensor_origin
            + (x as f64 + 0.5) * self.pixel_delta_x
            + (y as f64 + 0.5) * self.pixel_delta_y
    }

    /// Primary ray through pixel `(x, y)`.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let pixel = self.pixel_center(x, y);
        match self.projection {
            Projection::Perspective => Ray::new(self.position, pixel - self.position),
            Projection::Orthographic => Ray::new(pixel, DVec3::new(0.0, 0.0, -1.0)),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_z() {
        let mut camera = Camera::new().with_resolution(3, 3);
        camera.initialize();

        let ray = camera.get_ray(1, 1);
        assert_eq!(ray.origin(), DVec3::new(0.0, 0.0, 2.0));
        assert!((ray.direction() - DVec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_sensor_spans_field_of_view() {
        let mut camera = Camera::new()
            .with_resolution(100, 100)
            .with_position(DVec3::ZERO)
            .with_lens(1.0, std::f64::consts::FRAC_PI_2);
        camera.initialize();

        // tan(45°) * 1 = 1, so the sensor spans [-1, 1] on both axes at z = -1
        let top_left = camera.pixel_center(0, 0);
        assert!((top_left - DVec3::new(-0.99, 0.99, -1.0)).length() < 1e-12);

        let bottom_right = camera.pixel_center(99, 99);
        assert!((bottom_right - DVec3::new(0.99, -0.99, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_aspect_ratio_widens_sensor() {
        let mut camera = Camera::new()
            .with_resolution(200, 100)
            .with_position(DVec3::ZERO)
            .with_lens(1.0, std::f64::consts::FRAC_PI_2);
        camera.initialize();

        let left_edge = camera.pixel_center(0, 50).x - 0.5 * 4.0 / 200.0;
        assert!((left_edge + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_config_keeps_projection() {
        let config = CameraConfig {
            projection: Projection::Orthographic,
            ..CameraConfig::default()
        };

        assert_eq!(Camera::from_config(&config).projection(), Projection::Orthographic);
        assert_eq!(Camera::new().projection(), Projection::Perspective);
    }

    #[test]
    fn test_orthographic_rays_are_parallel() {
        let mut camera = Camera::new()
            .with_resolution(10, 10)
            .with_projection(Projection::Orthographic);
        camera.initialize();

        let a = camera.get_ray(0, 0);
        let b = camera.get_ray(9, 4);

        assert_eq!(a.direction(), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(b.direction(), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(a.origin(), camera.pixel_center(0, 0));
        assert_ne!(a.origin(), b.origin());
    }
}
