//! Blinn-Phong local shading with inverse-square light falloff.

use lux_core::{Color, Light, Material};
use lux_math::Ray;

use crate::hittable::HitRecord;

/// Lights closer to the hit point than this (squared) contribute nothing.
pub const MIN_LIGHT_DISTANCE_SQUARED: f64 = 1e-12;

/// Color of the nearest hit, or transparent black when there is none.
///
/// `ambient` is the material's ambient color times the global ambient
/// light. Each light adds a Lambert diffuse term and a Blinn-Phong
/// specular term, scaled by its color and divided by the squared distance
/// to the hit point. Alpha is forced to 1 on a hit. Values are not
/// clamped; that happens when the image is encoded.
pub fn shade(
    ray: &Ray,
    hit: Option<&HitRecord>,
    lights: &[Light],
    ambient_light: Color,
    material: &Material,
) -> Color {
    let Some(hit) = hit else {
        return Color::ZERO;
    };

    let ambient = material.ambient * ambient_light;
    let n = hit.normal;

    let mut lights_color = Color::ZERO;
    for light in lights {
        let to_light = light.position - hit.point;
        let distance_squared = to_light.length_squared();
        if distance_squared <= MIN_LIGHT_DISTANCE_SQUARED {
            continue;
        }
        let l = to_light / distance_squared.sqrt();

        let diffuse = material.diffuse * l.dot(n).max(0.0);

        let h = (l - ray.direction()).normalize_or_zero();
        let specular = material.specular * n.dot(h).max(0.0).powf(material.specular_exponent);

        lights_color += (diffuse + specular) * light.color / distance_squared;
    }

    let mut color = ambient + lights_color;
    color.w = 1.0;
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_math::DVec3;

    fn hit_at_origin() -> HitRecord {
        HitRecord {
            point: DVec3::ZERO,
            normal: DVec3::Z,
            t: 5.0,
            triangle: 0,
            u: 0.2,
            v: 0.2,
        }
    }

    fn down_ray() -> Ray {
        Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_no_hit_is_transparent() {
        let lights = [Light::new(DVec3::Z, Color::ONE)];
        let color = shade(
            &down_ray(),
            None,
            &lights,
            Color::splat(0.2),
            &Material::default(),
        );
        assert_eq!(color, Color::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_lights_is_ambient() {
        let material = Material::default();
        let ambient_light = Color::new(0.2, 0.4, 0.6, 0.0);
        let hit = hit_at_origin();

        let color = shade(&down_ray(), Some(&hit), &[], ambient_light, &material);

        let expected = material.ambient * ambient_light;
        assert_eq!(color.truncate(), expected.truncate());
        assert_eq!(color.w, 1.0);
    }

    #[test]
    fn test_light_along_normal() {
        let material = Material {
            ambient: Color::ZERO,
            diffuse: Color::new(0.5, 0.5, 0.5, 0.0),
            specular: Color::new(0.2, 0.2, 0.2, 0.0),
            specular_exponent: 256.0,
        };
        let lights = [Light::new(DVec3::new(0.0, 0.0, 2.0), Color::new(4.0, 4.0, 4.0, 0.0))];
        let hit = hit_at_origin();

        let color = shade(&down_ray(), Some(&hit), &lights, Color::ZERO, &material);

        // L = N and H = N, so diffuse = 0.5 and specular = 0.2, over distance² = 4
        let expected = (0.5 + 0.2) * 4.0 / 4.0;
        assert!((color.x - expected).abs() < 1e-12);
        assert!((color.y - expected).abs() < 1e-12);
        assert!((color.z - expected).abs() < 1e-12);
        assert_eq!(color.w, 1.0);
    }

    #[test]
    fn test_light_behind_surface() {
        let material = Material {
            ambient: Color::ZERO,
            ..Material::default()
        };
        let lights = [Light::new(DVec3::new(0.0, 0.0, -3.0), Color::splat(16.0))];
        let hit = hit_at_origin();

        let color = shade(&down_ray(), Some(&hit), &lights, Color::ZERO, &material);
        assert_eq!(color, Color::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_inverse_square_falloff() {
        let material = Material {
            ambient: Color::ZERO,
            specular: Color::ZERO,
            ..Material::default()
        };
        let hit = hit_at_origin();

        let near = [Light::new(DVec3::new(0.0, 0.0, 1.0), Color::ONE)];
        let far = [Light::new(DVec3::new(0.0, 0.0, 2.0), Color::ONE)];

        let near_color = shade(&down_ray(), Some(&hit), &near, Color::ZERO, &material);
        let far_color = shade(&down_ray(), Some(&hit), &far, Color::ZERO, &material);

        assert!((near_color.x / far_color.x - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_lights_accumulate() {
        let material = Material::default();
        let hit = hit_at_origin();
        let light = Light::new(DVec3::new(1.0, 2.0, 3.0), Color::splat(10.0));

        let one = shade(&down_ray(), Some(&hit), &[light], Color::ZERO, &material);
        let two = shade(&down_ray(), Some(&hit), &[light, light], Color::ZERO, &material);

        assert!((two.x - 2.0 * one.x).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_light_is_ignored() {
        let material = Material::default();
        let hit = hit_at_origin();
        let lights = [Light::new(DVec3::ZERO, Color::splat(16.0))];

        let color = shade(&down_ray(), Some(&hit), &lights, Color::splat(0.2), &material);

        assert!(color.is_finite());
        assert_eq!(color.truncate(), (material.ambient * Color::splat(0.2)).truncate());
    }
}
