//! Exhibit constructors.

use crate::core::constants::*;
use crate::core::geometry::Shape;
use crate::core::scene::{Artifact, ArtifactKind, Material, MeshNode, Transform};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

pub const POTTERY_TITLE: &str = "Ancient Pottery";
pub const POTTERY_DESCRIPTION: &str = "This pottery artifact represents early trade networks and domestic life. Such vessels were used for storing grains and water, showcasing advanced ceramic craftsmanship.";

pub const SCULPTURE_TITLE: &str = "Stone Sculpture";
pub const SCULPTURE_DESCRIPTION: &str = "Inspired by classical temple carvings, this sculpture reflects artistic excellence and spiritual symbolism in ancient Indian architecture.";

pub const URBAN_MODEL_TITLE: &str = "Urban Model";
pub const URBAN_MODEL_DESCRIPTION: &str = "Inspired by the Indus Valley Civilization, this miniature city demonstrates early grid planning, drainage systems, and organized urban development.";

pub fn floor() -> MeshNode {
    MeshNode::new(
        Shape::Plane {
            width: FLOOR_SIZE,
            height: FLOOR_SIZE,
        },
        Material::new(FLOOR_HEX),
    )
    .at(Transform::default().with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)))
    .receiving_shadow()
}

pub fn pottery(position: Vec3) -> Artifact {
    let body = MeshNode::new(
        Shape::Cylinder {
            radius_top: 0.6,
            radius_bottom: 0.8,
            height: 1.5,
            segments: 32,
        },
        Material::new(0xa0522d).with_roughness(0.8),
    )
    .casting_shadow();

    let lip = MeshNode::new(
        Shape::Torus {
            radius: 0.6,
            tube: 0.1,
            radial_segments: 16,
            tubular_segments: 100,
        },
        Material::new(0x8b4513),
    )
    .at(Transform::from_translation(Vec3::new(0.0, 0.8, 0.0))
        .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0)));

    Artifact::new(
        ArtifactKind::Pottery,
        POTTERY_TITLE,
        POTTERY_DESCRIPTION,
        position,
        vec![body, lip],
    )
}

pub fn sculpture(position: Vec3) -> Artifact {
    let statue = MeshNode::new(
        Shape::Sphere {
            radius: 0.8,
            width_segments: 32,
            height_segments: 32,
        },
        Material::new(0xcccccc).with_roughness(0.4),
    )
    .casting_shadow();

    let base = MeshNode::new(
        Shape::Cylinder {
            radius_top: 1.0,
            radius_bottom: 1.0,
            height: 0.4,
            segments: 32,
        },
        Material::new(0x555555),
    )
    .at(Transform::from_translation(Vec3::new(0.0, -1.0, 0.0)));

    Artifact::new(
        ArtifactKind::Sculpture,
        SCULPTURE_TITLE,
        SCULPTURE_DESCRIPTION,
        position,
        vec![statue, base],
    )
}

/// A 3x3 block of buildings with heights drawn from `rng`.
pub fn urban_model<R: Rng + ?Sized>(position: Vec3, rng: &mut R) -> Artifact {
    let mut buildings = Vec::with_capacity(URBAN_GRID.len() * URBAN_GRID.len());
    for i in URBAN_GRID {
        for j in URBAN_GRID {
            let height = rng.gen_range(URBAN_MIN_HEIGHT..URBAN_MAX_HEIGHT);
            let building = MeshNode::new(
                Shape::Box {
                    width: 1.0,
                    height,
                    depth: 1.0,
                },
                Material::new(0x8b4513),
            )
            .at(Transform::from_translation(Vec3::new(i, height / 2.0, j)))
            .casting_shadow();
            buildings.push(building);
        }
    }

    Artifact::new(
        ArtifactKind::UrbanModel,
        URBAN_MODEL_TITLE,
        URBAN_MODEL_DESCRIPTION,
        position,
        buildings,
    )
}

/// The three exhibits in their gallery positions.
pub fn gallery<R: Rng + ?Sized>(rng: &mut R) -> Vec<Artifact> {
    vec![
        pottery(POTTERY_POSITION),
        sculpture(SCULPTURE_POSITION),
        urban_model(URBAN_MODEL_POSITION, rng),
    ]
}
