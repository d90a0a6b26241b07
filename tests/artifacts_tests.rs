// Host-side tests for the exhibit constructors.

use artifact_viewer::core::artifacts::*;
use artifact_viewer::core::constants::*;
use artifact_viewer::core::geometry::Shape;
use artifact_viewer::core::scene::{ArtifactKind, Scene};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::FRAC_PI_2;

fn building_heights(seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    urban_model(URBAN_MODEL_POSITION, &mut rng)
        .children
        .iter()
        .map(|b| match b.shape {
            Shape::Box { height, .. } => height,
            other => panic!("unexpected shape {other:?}"),
        })
        .collect()
}

#[test]
fn urban_model_is_a_three_by_three_grid() {
    let mut rng = StdRng::seed_from_u64(1);
    let model = urban_model(Vec3::new(4.0, 0.5, -2.0), &mut rng);
    assert_eq!(model.kind, ArtifactKind::UrbanModel);
    assert_eq!(model.children.len(), 9);

    let mut cells = Vec::new();
    for building in &model.children {
        let Shape::Box {
            width,
            height,
            depth,
        } = building.shape
        else {
            panic!("building is not a box");
        };
        assert_eq!((width, depth), (1.0, 1.0));
        assert!((0.5..2.5).contains(&height), "height {height}");
        let t = building.local.translation;
        assert!((t.y - height / 2.0).abs() < 1e-6, "building rests on the base");
        assert!((building.data.bounds().size().y - height).abs() < 1e-5);
        assert!(building.cast_shadow);
        cells.push((t.x as i32, t.z as i32));
    }
    let mut expected = Vec::new();
    for i in [-2, 0, 2] {
        for j in [-2, 0, 2] {
            expected.push((i, j));
        }
    }
    assert_eq!(cells, expected);
}

#[test]
fn urban_heights_stay_in_range_across_seeds() {
    for seed in 0..200 {
        for h in building_heights(seed) {
            assert!((URBAN_MIN_HEIGHT..URBAN_MAX_HEIGHT).contains(&h));
        }
    }
}

#[test]
fn seeded_generator_is_reproducible() {
    assert_eq!(building_heights(42), building_heights(42));
    assert_ne!(building_heights(42), building_heights(43));
}

#[test]
fn pottery_has_body_and_rotated_lip() {
    let pottery = pottery(POTTERY_POSITION);
    assert_eq!(pottery.title, POTTERY_TITLE);
    assert_eq!(pottery.children.len(), 2);
    assert_eq!(pottery.transform.translation, POTTERY_POSITION);
    assert_eq!(pottery.base_y, POTTERY_POSITION.y);

    let body = &pottery.children[0];
    assert!(matches!(
        body.shape,
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            segments: 32,
        } if radius_top == 0.6 && radius_bottom == 0.8 && height == 1.5
    ));
    assert_eq!(body.material.roughness, 0.8);
    assert!(body.cast_shadow);

    let lip = &pottery.children[1];
    assert!(matches!(lip.shape, Shape::Torus { radial_segments: 16, tubular_segments: 100, .. }));
    assert_eq!(lip.local.translation, Vec3::new(0.0, 0.8, 0.0));
    assert_eq!(lip.local.rotation, Vec3::new(FRAC_PI_2, 0.0, 0.0));
    assert!(!lip.cast_shadow);
}

#[test]
fn sculpture_has_statue_on_base() {
    let sculpture = sculpture(SCULPTURE_POSITION);
    assert_eq!(sculpture.title, SCULPTURE_TITLE);
    assert_eq!(sculpture.kind, ArtifactKind::Sculpture);
    let statue = &sculpture.children[0];
    assert!(matches!(statue.shape, Shape::Sphere { radius, .. } if radius == 0.8));
    assert_eq!(statue.material.roughness, 0.4);
    let base = &sculpture.children[1];
    assert_eq!(base.local.translation, Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(base.material.roughness, 1.0);
}

#[test]
fn scene_orders_floor_before_artifact_meshes() {
    let mut rng = StdRng::seed_from_u64(3);
    let scene = Scene::new(gallery(&mut rng));
    assert_eq!(scene.mesh_count(), 1 + 2 + 2 + 9);
    assert_eq!(scene.mesh_instances().count(), scene.mesh_count());
    let (_, first) = scene.mesh_instances().next().unwrap();
    assert!(matches!(first.shape, Shape::Plane { .. }));
    assert!(first.receive_shadow);
    // the floor is drawn but never pickable
    assert!(scene
        .artifacts
        .iter()
        .all(|a| a.children.iter().all(|c| !matches!(c.shape, Shape::Plane { .. }))));
}

#[test]
fn floor_is_rotated_flat() {
    let floor = floor();
    let up = floor.local.matrix().transform_vector3(Vec3::Z);
    assert!((up - Vec3::Y).length() < 1e-6);
}
