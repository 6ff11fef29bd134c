use crate::{DVec3, Ray};

/// Axis-Aligned Bounding Box for the BVH.
///
/// Stored as a min/max corner pair. `Aabb::EMPTY` (min = +inf, max = -inf)
/// is the identity for [`Aabb::surrounding`] and [`Aabb::extend`], so boxes
/// can be accumulated with a fold. No padding is applied: a box built from
/// points is exactly their bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// An empty box (contains nothing).
    pub const EMPTY: Aabb = Aabb {
        min: DVec3::INFINITY,
        max: DVec3::NEG_INFINITY,
    };

    /// Create an AABB from two corner points.
    pub fn from_points(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Bounds of a triangle.
    pub fn from_triangle(a: DVec3, b: DVec3, c: DVec3) -> Self {
        let mut aabb = Self::EMPTY;
        aabb.extend(a);
        aabb.extend(b);
        aabb.extend(c);
        aabb
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            min: box0.min.min(box1.min),
            max: box0.max.max(box1.max),
        }
    }

    /// Grow the box to include a point.
    #[inline]
    pub fn extend(&mut self, p: DVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// True if the box contains nothing.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// True if `p` lies inside or on the boundary of the box.
    pub fn contains_point(&self, p: DVec3) -> bool {
        self.min.cmple(p).all() && p.cmple(self.max).all()
    }

    /// True if `other` lies entirely inside this box.
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }

    /// Size of the box along each axis.
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the center point of the bounding box.
    pub fn centroid(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    ///
    /// Ties go to the first axis, so a cube splits along X.
    pub fn longest_axis(&self) -> usize {
        let e = self.extent();
        if e.x >= e.y && e.x >= e.z {
            0
        } else if e.y >= e.z {
            1
        } else {
            2
        }
    }

    /// Test if a ray intersects this AABB anywhere at `t >= 0`.
    ///
    /// Uses the slab method. Entry and exit are swapped on axes where the
    /// reciprocal direction is negative, which also covers `-0.0`
    /// components producing `-inf`.
    pub fn hit(&self, ray: &Ray) -> bool {
        let inv = ray.inv_direction();
        let mut t_min = (self.min - ray.origin()) * inv;
        let mut t_max = (self.max - ray.origin()) * inv;

        for axis in 0..3 {
            if inv[axis] < 0.0 {
                std::mem::swap(&mut t_min[axis], &mut t_max[axis]);
            }
        }

        let entry = t_min.max_element();
        let exit = t_max.min_element();

        entry <= exit && exit >= 0.0
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_points(DVec3::splat(-1.0), DVec3::splat(1.0))
    }

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(DVec3::new(10.0, 0.0, 10.0), DVec3::new(0.0, 10.0, 0.0));

        assert_eq!(aabb.min, DVec3::ZERO);
        assert_eq!(aabb.max, DVec3::splat(10.0));
    }

    #[test]
    fn test_aabb_from_triangle_is_exact() {
        let aabb = Aabb::from_triangle(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        );

        assert_eq!(aabb.min, DVec3::ZERO);
        assert_eq!(aabb.max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_aabb_surrounding() {
        let box1 = Aabb::from_points(DVec3::ZERO, DVec3::splat(5.0));
        let box2 = Aabb::from_points(DVec3::splat(3.0), DVec3::splat(10.0));
        let surrounding = Aabb::surrounding(&box1, &box2);

        assert_eq!(surrounding.min, DVec3::ZERO);
        assert_eq!(surrounding.max, DVec3::splat(10.0));
        assert!(surrounding.contains(&box1));
        assert!(surrounding.contains(&box2));
    }

    #[test]
    fn test_empty_is_union_identity() {
        let aabb = unit_box();
        assert!(Aabb::EMPTY.is_empty());
        assert_eq!(Aabb::surrounding(&Aabb::EMPTY, &aabb), aabb);
    }

    #[test]
    fn test_contains_point() {
        let aabb = unit_box();
        assert!(aabb.contains_point(DVec3::ZERO));
        assert!(aabb.contains_point(DVec3::splat(1.0)));
        assert!(!aabb.contains_point(DVec3::new(0.0, 1.5, 0.0)));
    }

    #[test]
    fn test_aabb_longest_axis() {
        let aabb_x = Aabb::from_points(DVec3::ZERO, DVec3::new(10.0, 1.0, 1.0));
        assert_eq!(aabb_x.longest_axis(), 0);

        let aabb_y = Aabb::from_points(DVec3::ZERO, DVec3::new(1.0, 10.0, 1.0));
        assert_eq!(aabb_y.longest_axis(), 1);

        let aabb_z = Aabb::from_points(DVec3::ZERO, DVec3::new(1.0, 1.0, 10.0));
        assert_eq!(aabb_z.longest_axis(), 2);

        // Ties resolve to the first maximum
        let aabb_yz = Aabb::from_points(DVec3::ZERO, DVec3::new(1.0, 4.0, 4.0));
        assert_eq!(aabb_yz.longest_axis(), 1);
        assert_eq!(unit_box().longest_axis(), 0);
    }

    #[test]
    fn test_aabb_centroid() {
        let aabb = Aabb::from_points(DVec3::ZERO, DVec3::splat(10.0));
        assert_eq!(aabb.centroid(), DVec3::splat(5.0));
    }

    #[test]
    fn test_aabb_hit_through_center() {
        let aabb = unit_box();

        let ray = Ray::new(DVec3::new(0.0, 0.0, -5.0), DVec3::Z);
        assert!(aabb.hit(&ray));

        let diagonal = Ray::new(DVec3::splat(5.0), DVec3::splat(-1.0));
        assert!(aabb.hit(&diagonal));
    }

    #[test]
    fn test_aabb_miss_offset_parallel() {
        let aabb = unit_box();

        // Offset beyond the extent on one axis, parallel to the others
        let ray = Ray::new(DVec3::new(1.5, 0.0, -5.0), DVec3::Z);
        assert!(!aabb.hit(&ray));

        let ray = Ray::new(DVec3::new(0.0, -1.5, -5.0), DVec3::Z);
        assert!(!aabb.hit(&ray));

        let ray = Ray::new(DVec3::new(-5.0, 0.0, 2.0), DVec3::X);
        assert!(!aabb.hit(&ray));
    }

    #[test]
    fn test_aabb_behind_origin() {
        let aabb = unit_box();

        let ray = Ray::new(DVec3::new(0.0, 0.0, -5.0), DVec3::new(0.0, 0.0, -1.0));
        assert!(!aabb.hit(&ray));
    }

    #[test]
    fn test_aabb_origin_inside() {
        let aabb = unit_box();

        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.3, -0.2, 0.9));
        assert!(aabb.hit(&ray));
    }

    #[test]
    fn test_aabb_negative_zero_direction() {
        let aabb = unit_box();

        let ray = Ray::new(DVec3::new(0.5, 0.0, 5.0), DVec3::new(-0.0, 0.0, -1.0));
        assert!(aabb.hit(&ray));

        let ray = Ray::new(DVec3::new(2.0, 0.0, 5.0), DVec3::new(-0.0, 0.0, -1.0));
        assert!(!aabb.hit(&ray));
    }

    #[test]
    fn test_flat_box_hit() {
        // Zero thickness along z, as produced by an axis-aligned triangle
        let aabb = Aabb::from_points(DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0));

        let ray = Ray::new(DVec3::new(0.2, 0.2, 5.0), DVec3::new(0.0, 0.0, -1.0));
        assert!(aabb.hit(&ray));
    }
}
