//! Ray-triangle intersection.
//!
//! Solves `a + u·(b − a) + v·(c − a) = origin + t·direction` for
//! `(u, v, t)` by inverting the 3×3 system directly.

use lux_math::{DMat3, DVec3, Ray};

/// Relative cutoff for a singular system.
///
/// Applied to `|det| / |e1 × e2|` (the cosine between the ray and the
/// plane normal) and to `|e1 × e2| / (|e1| |e2|)` (the sine of the corner
/// angle at `a`), so the test does not depend on the size of the mesh.
pub const DETERMINANT_EPSILON: f64 = 1e-12;

/// Result of a successful ray-triangle test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance along the ray
    pub t: f64,
    /// Barycentric weight of `b`
    pub u: f64,
    /// Barycentric weight of `c`
    pub v: f64,
    /// Intersection point, `origin + t * direction`
    pub point: DVec3,
    /// Unit normal of `(b - a) × (c - a)`, not flipped toward the ray
    pub normal: DVec3,
}

/// Intersect a ray with triangle `(a, b, c)`.
///
/// Returns `None` when the intersection lies outside the triangle, behind
/// the ray origin, or when the system cannot be solved reliably.
pub fn intersect_triangle(ray: &Ray, a: DVec3, b: DVec3, c: DVec3) -> Option<TriangleHit> {
    let edge1 = b - a;
    let edge2 = c - a;

    let cross = edge1.cross(edge2);
    let area = cross.length();

    // Zero-area triangle
    if area == 0.0 || area < DETERMINANT_EPSILON * edge1.length() * edge2.length() {
        return None;
    }

    // Ray parallel to the plane
    let system = DMat3::from_cols(-edge1, -edge2, ray.direction());
    if system.determinant().abs() < DETERMINANT_EPSILON * area {
        return None;
    }

    let uvt = system.inverse() * (a - ray.origin());
    if !uvt.is_finite() {
        return None;
    }

    let (u, v, t) = (uvt.x, uvt.y, uvt.z);
    let inside = u >= 0.0 && v >= 0.0 && t >= 0.0 && u + v <= 1.0;
    if !inside {
        return None;
    }

    Some(TriangleHit {
        t,
        u,
        v,
        point: ray.at(t),
        normal: cross / area,
    })
}
