//! Indexed triangle meshes.
//!
//! A mesh owns a vertex buffer and a list of index triples into it. The
//! renderer assumes every index is in range; loaders call [`Mesh::validate`]
//! before handing a mesh over.

use crt_math::{triangle_normal, Color, Vec3};
use thiserror::Error;

/// Errors reported by [`Mesh::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
}

/// A mesh consisting of vertex positions and triangle indices.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions in world space
    pub vertices: Vec<Vec3>,

    /// Triangles as triples of vertex indices (counter-clockwise front face)
    pub triangles: Vec<[u32; 3]>,

    /// Surface tint applied to light hitting this mesh
    pub albedo: Color,
}

impl Mesh {
    /// Create a new white mesh from vertices and index triples.
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            albedo: Color::ONE,
        }
    }

    /// Set the surface albedo.
    pub fn with_albedo(mut self, albedo: Color) -> Self {
        self.albedo = albedo;
        self
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Vertex positions of triangle `index`.
    ///
    /// Panics if `index` or any of the triangle's vertex indices is out of
    /// range; run [`Mesh::validate`] first on untrusted data.
    #[inline]
    pub fn triangle(&self, index: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Iterate over the vertex positions of every triangle, in order.
    pub fn iter_triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        (0..self.triangles.len()).map(move |i| self.triangle(i))
    }

    /// Unit face normal of triangle `index` (zero for degenerate triangles).
    pub fn face_normal(&self, index: usize) -> Vec3 {
        let [a, b, c] = self.triangle(index);
        triangle_normal(a, b, c)
    }

    /// Check that every triangle references existing vertices.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for (triangle, indices) in self.triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}
