//! Scene graph: a floor, lights and a fixed list of artifact groups.

use crate::core::color::Color;
use crate::core::constants::*;
use crate::core::geometry::{MeshData, Shape};
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.translation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub roughness: f32,
    pub emissive: Color,
}

impl Material {
    pub fn new(hex: u32) -> Self {
        Self {
            color: Color::from_hex(hex),
            roughness: 1.0,
            emissive: Color::BLACK,
        }
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }
}

#[derive(Clone, Debug)]
pub struct MeshNode {
    pub shape: Shape,
    pub data: MeshData,
    pub local: Transform,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshNode {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self {
            data: shape.build(),
            shape,
            local: Transform::default(),
            material,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn at(mut self, local: Transform) -> Self {
        self.local = local;
        self
    }

    pub fn casting_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    pub fn receiving_shadow(mut self) -> Self {
        self.receive_shadow = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    Pottery,
    Sculpture,
    UrbanModel,
}

/// A titled, pickable group of meshes.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub title: String,
    pub description: String,
    pub transform: Transform,
    /// Height the vertical bob oscillates around.
    pub base_y: f32,
    pub children: Vec<MeshNode>,
}

impl Artifact {
    pub fn new(
        kind: ArtifactKind,
        title: &str,
        description: &str,
        position: Vec3,
        children: Vec<MeshNode>,
    ) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            description: description.to_owned(),
            transform: Transform::from_translation(position),
            base_y: position.y,
            children,
        }
    }

    pub fn set_emissive(&mut self, emissive: Color) {
        for child in &mut self.children {
            child.material.emissive = emissive;
        }
    }

    /// Yaw by `step` and place the group on its bob curve for time `t`.
    pub fn animate(&mut self, index: usize, t: f32, step: f32, amplitude: f32, frequency: f32) {
        self.transform.rotation.y += step;
        self.transform.translation.y =
            self.base_y + amplitude * (t * frequency + index as f32).sin();
    }

    pub fn mesh_instances(&self) -> impl Iterator<Item = (Mat4, &MeshNode)> + '_ {
        let group = self.transform.matrix();
        self.children
            .iter()
            .map(move |child| (group * child.local.matrix(), child))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct HemisphereLight {
    pub sky: Color,
    pub ground: Color,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    pub cast_shadow: bool,
}

impl DirectionalLight {
    /// Orthographic light-space transform used for the shadow map; the light
    /// shines from `position` toward the origin.
    pub fn view_proj(&self) -> Mat4 {
        let eye = self.position.normalize_or_zero() * SHADOW_DISTANCE;
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::orthographic_rh(
            -SHADOW_EXTENT,
            SHADOW_EXTENT,
            -SHADOW_EXTENT,
            SHADOW_EXTENT,
            0.5,
            SHADOW_DISTANCE * 2.5,
        );
        proj * view
    }
}

pub struct Scene {
    pub background: Color,
    pub fog: Fog,
    pub hemisphere: HemisphereLight,
    pub sun: DirectionalLight,
    pub floor: MeshNode,
    pub artifacts: Vec<Artifact>,
}

impl Scene {
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        let background = Color::from_hex(BACKGROUND_HEX);
        Self {
            background,
            fog: Fog {
                color: background,
                near: FOG_NEAR,
                far: FOG_FAR,
            },
            hemisphere: HemisphereLight {
                sky: Color::from_hex(HEMI_SKY_HEX),
                ground: Color::from_hex(HEMI_GROUND_HEX),
                intensity: HEMI_INTENSITY,
            },
            sun: DirectionalLight {
                position: SUN_POSITION,
                color: Color::from_hex(SUN_HEX),
                intensity: SUN_INTENSITY,
                cast_shadow: true,
            },
            floor: crate::core::artifacts::floor(),
            artifacts,
        }
    }

    /// Every drawable mesh with its world matrix: the floor first, then the
    /// artifacts' children in registration order. The order never changes.
    pub fn mesh_instances(&self) -> impl Iterator<Item = (Mat4, &MeshNode)> + '_ {
        std::iter::once((self.floor.local.matrix(), &self.floor))
            .chain(self.artifacts.iter().flat_map(|a| a.mesh_instances()))
    }

    pub fn mesh_count(&self) -> usize {
        1 + self
            .artifacts
            .iter()
            .map(|a| a.children.len())
            .sum::<usize>()
    }
}
