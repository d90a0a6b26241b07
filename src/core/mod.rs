pub mod artifacts;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod highlight;
pub mod input;
pub mod panel;
pub mod picking;
pub mod scene;
pub mod viewer;

pub use config::ViewerConfig;
pub use viewer::Viewer;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
