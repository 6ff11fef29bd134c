use crate::DVec3;

/// A half-line in 3D space with an origin and a unit direction.
///
/// The direction is normalized on construction, so the intersection
/// parameter `t` is the distance travelled from the origin. The reciprocal
/// of the direction is cached for the slab test; a zero component yields
/// an infinite reciprocal, which the slab test handles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
    inv_direction: DVec3,
}

impl Ray {
    /// Create a new ray. `direction` does not need to be normalized.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        let direction = direction.normalize();
        Self {
            origin,
            direction,
            inv_direction: direction.recip(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the (unit) direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Component-wise reciprocal of the direction.
    #[inline]
    pub fn inv_direction(&self) -> DVec3 {
        self.inv_direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -4.0));
        assert_eq!(ray.direction(), DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(DVec3::new(1.0, 2.0, 3.0), DVec3::X);

        assert_eq!(ray.at(0.0), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(ray.at(2.0), DVec3::new(3.0, 2.0, 3.0));
        assert_eq!(ray.at(-1.0), DVec3::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn test_inv_direction_of_axis_aligned_ray() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, -1.0, 0.0));
        let inv = ray.inv_direction();

        assert_eq!(inv.y, -1.0);
        assert!(inv.x.is_infinite());
        assert!(inv.z.is_infinite());
    }
}
