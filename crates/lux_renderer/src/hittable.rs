//! Hittable trait and HitRecord for ray-mesh queries.

use std::sync::Arc;

use lux_core::Mesh;
use lux_math::{DVec3, Ray};

use crate::triangle::{intersect_triangle, TriangleHit};

/// Record of the nearest ray-mesh intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: DVec3,
    /// Unit face normal from the triangle's winding (not flipped toward the ray)
    pub normal: DVec3,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Index of the triangle that was hit
    pub triangle: usize,
    /// Barycentric coordinates of the hit within the triangle
    pub u: f64,
    pub v: f64,
}

impl HitRecord {
    pub(crate) fn from_triangle_hit(hit: TriangleHit, triangle: usize) -> Self {
        Self {
            point: hit.point,
            normal: hit.normal,
            t: hit.t,
            triangle,
            u: hit.u,
            v: hit.v,
        }
    }
}

/// Anything that can answer nearest-hit queries.
///
/// Implementors are immutable once built, so one instance can serve
/// queries from many threads at once.
pub trait Hittable: Send + Sync {
    /// Nearest intersection at `t >= 0`, or `None` if the ray hits nothing.
    fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord>;
}

/// Brute-force hittable that tests every triangle of a mesh.
///
/// Used as the reference answer when validating the BVH and for tiny
/// meshes where building a tree is not worth it.
pub struct TriangleList {
    mesh: Arc<Mesh>,
}

impl TriangleList {
    pub fn new(mesh: Arc<Mesh>) -> Self {
        Self { mesh }
    }

    /// Get the number of triangles.
    pub fn len(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }
}

impl Hittable for TriangleList {
    fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for index in 0..self.mesh.triangle_count() {
            let [a, b, c] = self.mesh.triangle(index);
            if let Some(hit) = intersect_triangle(ray, a, b, c) {
                if closest.map_or(true, |best| hit.t < best.t) {
                    closest = Some(HitRecord::from_triangle_hit(hit, index));
                }
            }
        }

        closest
    }
}
