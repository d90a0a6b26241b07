use fnv::FnvHashMap;
use glam::Vec3;

/// Held-key map keyed by lowercase key name. Last event wins per key.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    keys: FnvHashMap<String, bool>,
}

impl InputState {
    pub fn set_key(&mut self, key: &str, down: bool) {
        self.keys.insert(key.to_lowercase(), down);
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys
            .get(key.to_lowercase().as_str())
            .copied()
            .unwrap_or(false)
    }

    /// Camera displacement for one frame. Each held key contributes `step`
    /// along its world axis independently, so diagonals are not normalized.
    pub fn movement(&self, step: f32) -> Vec3 {
        let mut delta = Vec3::ZERO;
        if self.is_down("w") {
            delta.z -= step;
        }
        if self.is_down("s") {
            delta.z += step;
        }
        if self.is_down("a") {
            delta.x -= step;
        }
        if self.is_down("d") {
            delta.x += step;
        }
        delta
    }
}
