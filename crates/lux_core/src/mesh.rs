//! Triangle mesh geometry store.
//!
//! A `Mesh` owns vertex positions and triangles (triples of vertex
//! indices). It is validated once on construction and never mutated
//! afterwards, so it can be shared between threads behind an `Arc`.

use lux_math::{Aabb, DVec3};
use thiserror::Error;

/// Errors that can occur when building a mesh.
#[derive(Error, Debug, PartialEq)]
pub enum MeshError {
    #[error("Triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// Result type for mesh construction.
pub type MeshResult<T> = Result<T, MeshError>;

/// An immutable triangle mesh.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one DVec3 per vertex)
    positions: Vec<DVec3>,

    /// Triangles as vertex index triples
    triangles: Vec<[u32; 3]>,

    /// Axis-aligned bounding box of all vertices
    bounds: Aabb,
}

impl Mesh {
    /// Create a mesh, checking every vertex index against the vertex count.
    pub fn new(positions: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> MeshResult<Self> {
        let vertex_count = positions.len();
        for (triangle, face) in triangles.iter().enumerate() {
            if let Some(&index) = face.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }

        let bounds = positions.iter().fold(Aabb::EMPTY, |mut acc, p| {
            acc.extend(*p);
            acc
        });

        Ok(Self {
            positions,
            triangles,
            bounds,
        })
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Bounds of every vertex (empty for a mesh without vertices).
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Vertex positions `[a, b, c]` of triangle `index`.
    ///
    /// # Panics
    /// If `index >= triangle_count()`.
    #[inline]
    pub fn triangle(&self, index: usize) -> [DVec3; 3] {
        let [i0, i1, i2] = self.triangles[index];
        [
            self.positions[i0 as usize],
            self.positions[i1 as usize],
            self.positions[i2 as usize],
        ]
    }

    /// Mean of the triangle's three vertices.
    pub fn centroid(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangle(index);
        (a + b + c) / 3.0
    }

    /// Exact bounds of the triangle's three vertices.
    pub fn triangle_bounds(&self, index: usize) -> Aabb {
        let [a, b, c] = self.triangle(index);
        Aabb::from_triangle(a, b, c)
    }
}
