// Host-side tests for ray casting.

use artifact_viewer::core::artifacts;
use artifact_viewer::core::geometry::{Aabb, Shape};
use artifact_viewer::core::picking::*;
use glam::{Mat4, Vec3};

fn tri() -> (Vec3, Vec3, Vec3) {
    (
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    )
}

#[test]
fn ray_triangle_front_hit() {
    let (a, b, c) = tri();
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    let t = ray_triangle(&ray, a, b, c).expect("hit");
    assert!((t - 5.0).abs() < 1e-6);
}

#[test]
fn ray_triangle_ignores_back_faces() {
    let (a, b, c) = tri();
    let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
    assert!(ray_triangle(&ray, a, b, c).is_none());
}

#[test]
fn ray_starting_inside_a_closed_mesh_finds_nothing() {
    let statue = artifacts::sculpture(Vec3::new(0.0, 1.0, 0.0));
    let ray = Ray::new(
        Vec3::new(0.0, 1.2, 0.0),
        Vec3::new(0.01, 0.0, -1.0).normalize(),
    );
    assert!(pick(&ray, std::slice::from_ref(&statue)).is_none());

    let building = Shape::Box {
        width: 1.0,
        height: 3.0,
        depth: 1.0,
    }
    .build();
    let world = Mat4::from_translation(Vec3::new(0.0, 1.5, 0.0));
    let inside = Ray::new(Vec3::new(0.1, 2.9, 0.05), Vec3::NEG_Z);
    assert!(intersect_mesh(&inside, &building, &world).is_none());
    let outside = Ray::new(Vec3::new(0.1, 2.9, 5.0), Vec3::NEG_Z);
    let t = intersect_mesh(&outside, &building, &world).expect("front face");
    assert!((t - 4.5).abs() < 1e-5);
}

#[test]
fn exhibit_behind_an_enclosing_mesh_is_still_picked() {
    let enclosing = artifacts::sculpture(Vec3::new(0.0, 1.0, 0.0));
    let beyond = artifacts::sculpture(Vec3::new(0.0, 1.0, -6.0));
    let ray = Ray::new(Vec3::new(0.013, 1.021, 0.0), Vec3::NEG_Z);
    let hit = pick(&ray, &[enclosing, beyond]).expect("far sculpture");
    assert_eq!(hit.artifact, 1);
    assert!((hit.distance - 5.2).abs() < 0.01);
}

#[test]
fn ray_triangle_misses() {
    let (a, b, c) = tri();
    // outside the triangle
    let ray = Ray::new(Vec3::new(3.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(ray_triangle(&ray, a, b, c).is_none());
    // parallel to the plane
    let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::X);
    assert!(ray_triangle(&ray, a, b, c).is_none());
    // triangle behind the origin
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
    assert!(ray_triangle(&ray, a, b, c).is_none());
}

#[test]
fn ray_aabb_entry_distance() {
    let aabb = Aabb {
        min: Vec3::splat(-1.0),
        max: Vec3::splat(1.0),
    };
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!((ray_aabb(&ray, &aabb).unwrap() - 4.0).abs() < 1e-6);

    let inside = Ray::new(Vec3::ZERO, Vec3::X);
    assert_eq!(ray_aabb(&inside, &aabb), Some(0.0));

    let miss = Ray::new(Vec3::new(0.0, 3.0, 5.0), Vec3::NEG_Z);
    assert!(ray_aabb(&miss, &aabb).is_none());
}

#[test]
fn hits_are_sorted_nearest_first() {
    let near = artifacts::sculpture(Vec3::new(0.0, 0.0, 0.0));
    let far = artifacts::sculpture(Vec3::new(0.0, 0.0, -5.0));
    // slightly off-axis so the ray never grazes a shared vertex
    let ray = Ray::new(Vec3::new(0.013, 0.021, 10.0), Vec3::NEG_Z);

    let hits = intersect_artifacts(&ray, &[far.clone(), near.clone()]);
    assert!(hits.len() >= 2);
    assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    assert_eq!(hits[0].artifact, 1);
    assert!((hits[0].distance - 9.2).abs() < 0.01);

    let first = pick(&ray, &[near, far]).expect("hit");
    assert_eq!(first.artifact, 0);
    assert_eq!(first.mesh, 0, "statue sphere is the first child");
}

#[test]
fn child_transforms_are_applied() {
    // straight down onto the pottery lip, just outside the body's top rim
    let pottery = artifacts::pottery(Vec3::new(0.0, 1.0, 0.0));
    let ray = Ray::new(Vec3::new(0.61, 5.0, 0.013), Vec3::NEG_Y);
    let hit = pick(&ray, &[pottery]).expect("lip hit");
    assert_eq!(hit.mesh, 1);
    assert!((hit.distance - 3.1).abs() < 0.02, "distance {}", hit.distance);
    assert!((hit.point.y - 1.9).abs() < 0.02);
}

#[test]
fn empty_space_yields_no_hits() {
    let gallery = vec![
        artifacts::pottery(Vec3::new(0.0, 1.0, 0.0)),
        artifacts::sculpture(Vec3::new(-4.0, 1.0, -2.0)),
    ];
    // the floor is not part of the pickable set
    let ray = Ray::new(Vec3::new(10.0, 5.0, 10.0), Vec3::NEG_Y);
    assert!(intersect_artifacts(&ray, &gallery).is_empty());
    assert!(pick(&ray, &gallery).is_none());
}
