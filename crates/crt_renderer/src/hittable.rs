//! Hittable trait and HitRecord for ray-scene intersection.
//!
//! Queries are brute force: every triangle of every mesh is tested.

use crate::triangle::intersect_triangle;
use crt_core::{Mesh, Scene};
use crt_math::{Interval, Ray, Vec3};

/// Which sides of a triangle a query accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceFilter {
    /// Only hits where the ray approaches from the normal's side
    FrontOnly,
    /// Front and back hits alike
    Both,
}

impl FaceFilter {
    #[inline]
    fn accepts(self, front_face: bool) -> bool {
        match self {
            FaceFilter::FrontOnly => front_face,
            FaceFilter::Both => true,
        }
    }
}

/// Record of a ray-scene intersection.
///
/// `mesh_index` and `triangle_index` point back into the scene that produced
/// the record; they are plain indices, not references.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Unit geometric normal of the triangle that was hit
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face of the triangle
    pub front_face: bool,
    /// Index of the mesh in `Scene::meshes`
    pub mesh_index: usize,
    /// Index of the triangle in `Mesh::triangles`
    pub triangle_index: usize,
}

/// Trait for geometry that can be hit by rays.
pub trait Hittable {
    /// Find the nearest hit with `t` inside `ray_t` on an accepted side.
    ///
    /// When several hits share the smallest `t`, the first one in iteration
    /// order wins.
    fn hit(&self, ray: &Ray, ray_t: Interval, faces: FaceFilter) -> Option<HitRecord>;

    /// Returns true if anything, front or back facing, is hit with
    /// `ray_t.min <= t < ray_t.max`. Stops at the first hit found.
    fn occluded(&self, ray: &Ray, ray_t: Interval) -> bool;
}

impl Hittable for Mesh {
    fn hit(&self, ray: &Ray, ray_t: Interval, faces: FaceFilter) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for (triangle_index, vertices) in self.iter_triangles().enumerate() {
            let Some(hit) = intersect_triangle(ray, vertices) else {
                continue;
            };
            if !faces.accepts(hit.front_face) || !ray_t.contains(hit.t) {
                continue;
            }
            if closest.map_or(true, |best| hit.t < best.t) {
                closest = Some(HitRecord {
                    point: hit.point,
                    normal: hit.normal,
                    t: hit.t,
                    front_face: hit.front_face,
                    // Filled in by the scene
                    mesh_index: 0,
                    triangle_index,
                });
            }
        }

        closest
    }

    fn occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.iter_triangles().any(|vertices| {
            intersect_triangle(ray, vertices).is_some_and(|hit| ray_t.contains_half_open(hit.t))
        })
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval, faces: FaceFilter) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;

        for (mesh_index, mesh) in self.meshes.iter().enumerate() {
            let Some(hit) = mesh.hit(ray, ray_t, faces) else {
                continue;
            };
            if closest.map_or(true, |best| hit.t < best.t) {
                closest = Some(HitRecord { mesh_index, ..hit });
            }
        }

        closest
    }

    fn occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.meshes.iter().any(|mesh| mesh.occluded(ray, ray_t))
    }
}
