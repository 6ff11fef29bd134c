// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod aabb;
mod ray;
pub use aabb::Aabb;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_indexing() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_dvec4_componentwise_mul() {
        let a = DVec4::new(1.0, 2.0, 3.0, 4.0);
        let b = DVec4::new(0.5, 0.5, 2.0, 0.0);
        assert_eq!(a * b, DVec4::new(0.5, 1.0, 6.0, 0.0));
    }
}
