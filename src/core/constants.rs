use glam::Vec3;

// Shared scene/interaction tuning constants.

// Scene look
pub const BACKGROUND_HEX: u32 = 0x1e2230;
pub const FOG_NEAR: f32 = 15.0;
pub const FOG_FAR: f32 = 40.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 3.0, 8.0);
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, 1.0, 0.0);

// Lights
pub const HEMI_SKY_HEX: u32 = 0xffffff;
pub const HEMI_GROUND_HEX: u32 = 0x444444;
pub const HEMI_INTENSITY: f32 = 0.8;
pub const SUN_HEX: u32 = 0xffffff;
pub const SUN_INTENSITY: f32 = 1.0;
pub const SUN_POSITION: Vec3 = Vec3::new(5.0, 10.0, 5.0);

// Floor
pub const FLOOR_SIZE: f32 = 30.0;
pub const FLOOR_HEX: u32 = 0x999999;

// Exhibit placement
pub const POTTERY_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const SCULPTURE_POSITION: Vec3 = Vec3::new(-4.0, 1.0, -2.0);
pub const URBAN_MODEL_POSITION: Vec3 = Vec3::new(4.0, 0.5, -2.0);

// Urban model grid
pub const URBAN_GRID: [f32; 3] = [-2.0, 0.0, 2.0];
pub const URBAN_MIN_HEIGHT: f32 = 0.5;
pub const URBAN_MAX_HEIGHT: f32 = 2.5; // exclusive

// Per-frame motion
pub const MOVE_STEP: f32 = 0.1; // world units per held key per frame
pub const SPIN_STEP: f32 = 0.005; // radians of yaw per frame
pub const BOB_AMPLITUDE: f32 = 0.12; // world units around the rest height
pub const BOB_FREQUENCY: f32 = 1.0; // radians per second

// Highlight
pub const HIGHLIGHT_EMISSIVE_HEX: u32 = 0x222222;

// Host document
pub const PANEL_ID: &str = "infoPanel";
pub const PANEL_TITLE_ID: &str = "artifactTitle";
pub const PANEL_DESCRIPTION_ID: &str = "artifactDescription";
pub const BACKDROP_ID: &str = "backdrop";
pub const VISIBLE_CLASS: &str = "show";

// Rendering
pub const MSAA_SAMPLES: u32 = 4;
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SHADOW_EXTENT: f32 = 16.0; // half-width of the sun's orthographic box
pub const SHADOW_DISTANCE: f32 = 20.0; // sun eye distance from the origin
