//! The viewer context: scene, camera, input and selection in one owner.

use crate::core::artifacts;
use crate::core::camera::{screen_to_ndc, PerspectiveCamera};
use crate::core::config::ViewerConfig;
use crate::core::highlight::Highlight;
use crate::core::input::InputState;
use crate::core::picking;
use crate::core::scene::{Artifact, Scene};
use rand::Rng;

pub struct Viewer {
    pub config: ViewerConfig,
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub input: InputState,
    pub highlight: Highlight,
    width: u32,
    height: u32,
}

impl Viewer {
    /// Build the gallery scene for a `width` x `height` viewport. `rng` feeds
    /// the urban model's building heights.
    pub fn new<R: Rng + ?Sized>(config: ViewerConfig, width: u32, height: u32, rng: &mut R) -> Self {
        let scene = Scene::new(artifacts::gallery(rng));
        let cam = &config.camera;
        let mut camera = PerspectiveCamera::new(cam.fov_degrees, 1.0, cam.near, cam.far);
        camera.position = cam.position;
        camera.look_at(cam.look_at);
        camera.set_aspect(width as f32, height as f32);
        log::info!(
            "[viewer] {} artifacts, viewport {}x{}",
            scene.artifacts.len(),
            width,
            height
        );
        Self {
            config,
            scene,
            camera,
            input: InputState::default(),
            highlight: Highlight::None,
            width,
            height,
        }
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.scene.artifacts
    }

    pub fn selected(&self) -> Option<&Artifact> {
        self.highlight
            .selected()
            .and_then(|i| self.scene.artifacts.get(i))
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.set_key(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.set_key(key, false);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.camera.set_aspect(width as f32, height as f32);
    }

    /// Pick at a screen pixel. On a hit the selection moves to the owning
    /// artifact and its index is returned; a miss changes nothing.
    pub fn click(&mut self, sx: f32, sy: f32) -> Option<usize> {
        let ndc = screen_to_ndc(sx, sy, self.width as f32, self.height as f32);
        let ray = self.camera.ray_from_ndc(ndc);
        let hit = picking::pick(&ray, &self.scene.artifacts)?;
        self.highlight.select(
            &mut self.scene.artifacts,
            hit.artifact,
            self.config.highlight_emissive,
        );
        log::info!(
            "[pick] artifact {} ({}) at distance {:.2}",
            hit.artifact,
            self.scene.artifacts[hit.artifact].title,
            hit.distance
        );
        Some(hit.artifact)
    }

    /// One frame of motion: camera drift from held keys, then every
    /// artifact's spin and bob at `elapsed_sec` since start.
    pub fn update(&mut self, elapsed_sec: f32) {
        self.camera.position += self.input.movement(self.config.move_step);
        let cfg = &self.config;
        for (i, artifact) in self.scene.artifacts.iter_mut().enumerate() {
            artifact.animate(
                i,
                elapsed_sec,
                cfg.spin_step,
                cfg.bob_amplitude,
                cfg.bob_frequency,
            );
        }
    }
}
