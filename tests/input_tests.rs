// Host-side tests for held-key input and the camera's screen mapping.

use artifact_viewer::core::camera::{ndc_to_screen, screen_to_ndc, PerspectiveCamera};
use artifact_viewer::core::constants::*;
use artifact_viewer::core::input::InputState;
use glam::{Vec2, Vec3};

fn default_camera(width: f32, height: f32) -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(CAMERA_FOV_DEG, 1.0, CAMERA_NEAR, CAMERA_FAR);
    camera.position = CAMERA_POSITION;
    camera.look_at(CAMERA_LOOK_AT);
    camera.set_aspect(width, height);
    camera
}

#[test]
fn keys_are_case_insensitive() {
    let mut input = InputState::default();
    input.set_key("W", true);
    assert!(input.is_down("w"));
    assert!(input.is_down("W"));
    input.set_key("w", false);
    assert!(!input.is_down("W"));
}

#[test]
fn last_event_wins() {
    let mut input = InputState::default();
    input.set_key("d", true);
    input.set_key("d", true);
    input.set_key("d", false);
    assert!(!input.is_down("d"));
    assert_eq!(input.movement(1.0), Vec3::ZERO);
}

#[test]
fn movement_maps_keys_to_world_axes() {
    let cases = [
        ("w", Vec3::new(0.0, 0.0, -0.1)),
        ("s", Vec3::new(0.0, 0.0, 0.1)),
        ("a", Vec3::new(-0.1, 0.0, 0.0)),
        ("d", Vec3::new(0.1, 0.0, 0.0)),
    ];
    for (key, expected) in cases {
        let mut input = InputState::default();
        input.set_key(key, true);
        assert!((input.movement(MOVE_STEP) - expected).length() < 1e-6, "{key}");
    }
}

#[test]
fn diagonal_is_not_normalized() {
    let mut input = InputState::default();
    input.set_key("s", true);
    input.set_key("d", true);
    let delta = input.movement(MOVE_STEP);
    assert!((delta.length() - MOVE_STEP * 2f32.sqrt()).abs() < 1e-6);
}

#[test]
fn other_keys_do_not_move() {
    let mut input = InputState::default();
    for key in ["q", "e", "ArrowUp", " ", "Shift"] {
        input.set_key(key, true);
    }
    assert_eq!(input.movement(MOVE_STEP), Vec3::ZERO);
}

#[test]
fn screen_corners_map_to_ndc_corners() {
    let tl = screen_to_ndc(0.0, 0.0, 800.0, 600.0);
    let br = screen_to_ndc(800.0, 600.0, 800.0, 600.0);
    let center = screen_to_ndc(400.0, 300.0, 800.0, 600.0);
    assert_eq!(tl, Vec2::new(-1.0, 1.0));
    assert_eq!(br, Vec2::new(1.0, -1.0));
    assert!(center.length() < 1e-6);
    let back = ndc_to_screen(Vec2::new(0.5, -0.25), 800.0, 600.0);
    let ndc = screen_to_ndc(back.x, back.y, 800.0, 600.0);
    assert!((ndc - Vec2::new(0.5, -0.25)).length() < 1e-6);
}

#[test]
fn camera_looks_at_its_target() {
    let camera = default_camera(800.0, 600.0);
    let expected = (CAMERA_LOOK_AT - CAMERA_POSITION).normalize();
    assert!((camera.forward() - expected).length() < 1e-5);
    let ndc = camera.project(CAMERA_LOOK_AT).unwrap();
    assert!(ndc.length() < 1e-4);
}

#[test]
fn center_ray_points_forward() {
    let camera = default_camera(800.0, 600.0);
    let ray = camera.ray_from_ndc(Vec2::ZERO);
    assert_eq!(ray.origin, CAMERA_POSITION);
    assert!((ray.direction - camera.forward()).length() < 1e-3);
    assert!((ray.direction.length() - 1.0).abs() < 1e-5);
}

#[test]
fn ray_through_projected_point_passes_through_it() {
    let camera = default_camera(1024.0, 512.0);
    let world = Vec3::new(-4.0, 1.0, -2.0);
    let ndc = camera.project(world).unwrap();
    let ray = camera.ray_from_ndc(ndc);
    let to_point = world - ray.origin;
    let along = to_point.dot(ray.direction);
    assert!((ray.at(along) - world).length() < 1e-3);
}

#[test]
fn points_behind_the_camera_do_not_project() {
    let camera = default_camera(800.0, 600.0);
    assert!(camera.project(CAMERA_POSITION + Vec3::new(0.0, 0.0, 5.0)).is_none());
}

#[test]
fn aspect_tracks_viewport() {
    let mut camera = default_camera(800.0, 600.0);
    assert!((camera.aspect - 4.0 / 3.0).abs() < 1e-6);
    camera.set_aspect(1024.0, 512.0);
    assert!((camera.aspect - 2.0).abs() < 1e-6);
    camera.set_aspect(300.0, 0.0);
    assert!(camera.aspect.is_finite());
}
