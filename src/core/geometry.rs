//! Procedural mesh builders.
//!
//! Every builder emits indexed triangles wound counter-clockwise when seen
//! from outside the surface, with per-vertex normals pointing outward. Shapes
//! are centered on their local origin; cylinders and spheres run along +Y,
//! the torus lies in the XY plane and the plane faces +Z.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Parameters a mesh was built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Plane {
        width: f32,
        height: f32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

impl Shape {
    pub fn build(&self) -> MeshData {
        match *self {
            Shape::Plane { width, height } => plane(width, height),
            Shape::Box {
                width,
                height,
                depth,
            } => cuboid(width, height, depth),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => cylinder(radius_top, radius_bottom, height, segments),
            Shape::Sphere {
                radius,
                width_segments,
                height_segments,
            } => sphere(radius, width_segments, height_segments),
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(radius, tube, radial_segments, tubular_segments),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    pub fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.positions[t[0] as usize],
                self.positions[t[1] as usize],
                self.positions[t[2] as usize],
            ]
        })
    }

    pub fn bounds(&self) -> Aabb {
        let mut aabb = Aabb::EMPTY;
        for p in &self.positions {
            aabb.grow(*p);
        }
        aabb
    }
}

pub fn plane(width: f32, height: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let (hw, hh) = (width * 0.5, height * 0.5);
    let n = Vec3::Z;
    let a = mesh.push_vertex(Vec3::new(-hw, hh, 0.0), n);
    let b = mesh.push_vertex(Vec3::new(-hw, -hh, 0.0), n);
    let c = mesh.push_vertex(Vec3::new(hw, -hh, 0.0), n);
    let d = mesh.push_vertex(Vec3::new(hw, hh, 0.0), n);
    mesh.push_triangle(a, b, d);
    mesh.push_triangle(b, c, d);
    mesh
}

pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) * 0.5;
    // (normal, u, v) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let center = n * half;
        let u = u * half;
        let v = v * half;
        let p0 = mesh.push_vertex(center - u - v, n);
        let p1 = mesh.push_vertex(center + u - v, n);
        let p2 = mesh.push_vertex(center + u + v, n);
        let p3 = mesh.push_vertex(center - u + v, n);
        mesh.push_triangle(p0, p1, p2);
        mesh.push_triangle(p0, p2, p3);
    }
    mesh
}

/// Closed cylinder (or truncated cone) with a single height segment.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half_h = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;
    let mut mesh = MeshData::default();

    // side wall: row 0 at the top, row 1 at the bottom
    let mut rows = [Vec::new(), Vec::new()];
    for (row, (radius, y)) in [(radius_top, half_h), (radius_bottom, -half_h)]
        .into_iter()
        .enumerate()
    {
        for x in 0..=segments {
            let theta = x as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let normal = Vec3::new(sin, slope, cos).normalize();
            rows[row].push(mesh.push_vertex(Vec3::new(radius * sin, y, radius * cos), normal));
        }
    }
    for x in 0..segments as usize {
        let a = rows[0][x];
        let b = rows[1][x];
        let c = rows[1][x + 1];
        let d = rows[0][x + 1];
        mesh.push_triangle(a, b, d);
        mesh.push_triangle(b, c, d);
    }

    for top in [true, false] {
        let (radius, sign) = if top { (radius_top, 1.0) } else { (radius_bottom, -1.0) };
        if radius <= 0.0 {
            continue;
        }
        let normal = Vec3::Y * sign;
        let center = mesh.push_vertex(Vec3::new(0.0, half_h * sign, 0.0), normal);
        let first = mesh.positions.len() as u32;
        for x in 0..=segments {
            let theta = x as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.push_vertex(Vec3::new(radius * sin, half_h * sign, radius * cos), normal);
        }
        for x in 0..segments {
            let i = first + x;
            if top {
                mesh.push_triangle(i, i + 1, center);
            } else {
                mesh.push_triangle(i + 1, i, center);
            }
        }
    }
    mesh
}

/// UV sphere; pole rows emit a single triangle per quad.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    let mut grid = Vec::with_capacity(hs as usize + 1);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let mut row = Vec::with_capacity(ws as usize + 1);
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();
            let (sin_theta, cos_theta) = (v * PI).sin_cos();
            let p = Vec3::new(
                -radius * cos_phi * sin_theta,
                radius * cos_theta,
                radius * sin_phi * sin_theta,
            );
            row.push(mesh.push_vertex(p, p.normalize_or_zero()));
        }
        grid.push(row);
    }
    for iy in 0..hs as usize {
        for ix in 0..ws as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                mesh.push_triangle(a, b, d);
            }
            if iy != hs as usize - 1 {
                mesh.push_triangle(b, c, d);
            }
        }
    }
    mesh
}

pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshData::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.push_vertex(p, (p - center).normalize_or_zero());
        }
    }
    let stride = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }
    mesh
}
