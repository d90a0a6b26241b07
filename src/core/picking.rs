//! CPU ray casting against artifact meshes.

use crate::core::geometry::{Aabb, MeshData};
use crate::core::scene::Artifact;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

const EPSILON: f32 = 1e-7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Same ray expressed in the space `matrix` maps into. The parameter `t`
    /// is preserved because the direction is not renormalized.
    pub fn transformed(&self, matrix: &Mat4) -> Ray {
        Ray {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub artifact: usize,
    pub mesh: usize,
    pub distance: f32,
    pub point: Vec3,
}

pub type Hits = SmallVec<[Hit; 4]>;

/// Möller-Trumbore against the front face only (counter-clockwise winding
/// seen from the ray origin). Returns the ray parameter of the hit.
pub fn ray_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    // back faces and edge-on triangles
    if det < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = edge2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}

/// Slab test; returns the entry parameter (0 when the origin is inside).
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.direction[axis];
        if d.abs() < EPSILON {
            if o < aabb.min[axis] || o > aabb.max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (aabb.min[axis] - o) * inv;
        let mut t1 = (aabb.max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

/// Nearest hit of a world-space ray against a mesh placed by `world`.
pub fn intersect_mesh(ray: &Ray, mesh: &MeshData, world: &Mat4) -> Option<f32> {
    let local = ray.transformed(&world.inverse());
    ray_aabb(&local, &mesh.bounds())?;
    mesh.triangles()
        .filter_map(|[a, b, c]| ray_triangle(&local, a, b, c))
        .min_by(f32::total_cmp)
}

/// All hits against every mesh of every artifact, nearest first.
pub fn intersect_artifacts(ray: &Ray, artifacts: &[Artifact]) -> Hits {
    let mut hits = Hits::new();
    for (artifact_index, artifact) in artifacts.iter().enumerate() {
        for (mesh_index, (world, node)) in artifact.mesh_instances().enumerate() {
            if let Some(distance) = intersect_mesh(ray, &node.data, &world) {
                hits.push(Hit {
                    artifact: artifact_index,
                    mesh: mesh_index,
                    distance,
                    point: ray.at(distance),
                });
            }
        }
    }
    // stable: equal distances keep registration order
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

pub fn pick(ray: &Ray, artifacts: &[Artifact]) -> Option<Hit> {
    intersect_artifacts(ray, artifacts).first().copied()
}
