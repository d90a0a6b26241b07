use crate::core::color::Color;
use crate::core::constants::*;
use crate::core::panel::PanelIds;
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: CAMERA_POSITION,
            look_at: CAMERA_LOOK_AT,
        }
    }
}

/// Runtime knobs for [`Viewer`](crate::core::viewer::Viewer); defaults come
/// from `constants`.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub camera: CameraConfig,
    pub move_step: f32,
    pub spin_step: f32,
    pub bob_amplitude: f32,
    pub bob_frequency: f32,
    pub highlight_emissive: Color,
    pub panel: PanelIds,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            move_step: MOVE_STEP,
            spin_step: SPIN_STEP,
            bob_amplitude: BOB_AMPLITUDE,
            bob_frequency: BOB_FREQUENCY,
            highlight_emissive: Color::from_hex(HIGHLIGHT_EMISSIVE_HEX),
            panel: PanelIds::default(),
        }
    }
}
