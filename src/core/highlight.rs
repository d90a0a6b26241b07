use crate::core::color::Color;
use crate::core::scene::Artifact;

/// Which artifact currently carries the highlight emissive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    None,
    Selected(usize),
}

impl Highlight {
    pub fn selected(&self) -> Option<usize> {
        match *self {
            Highlight::None => None,
            Highlight::Selected(i) => Some(i),
        }
    }

    /// Reset the emissive on every mesh of every artifact.
    pub fn deselect_all(&mut self, artifacts: &mut [Artifact]) {
        for artifact in artifacts.iter_mut() {
            artifact.set_emissive(Color::BLACK);
        }
        *self = Highlight::None;
    }

    /// Two-phase update: clear all, then light up `index`. An out-of-range
    /// index leaves everything cleared.
    pub fn select(&mut self, artifacts: &mut [Artifact], index: usize, emissive: Color) {
        self.deselect_all(artifacts);
        if let Some(artifact) = artifacts.get_mut(index) {
            artifact.set_emissive(emissive);
            *self = Highlight::Selected(index);
        }
    }
}
