//! Shared scene state mutated by the control panel and read every frame.
//!
//! This is the only externally mutated data in the scene: the levitation
//! height driven by the slider and the two overlay visibility toggles.
//! Every visual element is a pure function of (elapsed time, this state).

use crate::constants::{HEIGHT_DEFAULT, HEIGHT_MAX, HEIGHT_MIN};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneState {
    pub levitation_height: f32,
    pub show_forces: bool,
    pub show_field_lines: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            levitation_height: HEIGHT_DEFAULT,
            show_forces: true,
            show_field_lines: true,
        }
    }
}

impl SceneState {
    /// Set the levitation height, clamped to the slider range.
    pub fn set_height(&mut self, height: f32) {
        self.levitation_height = height.clamp(HEIGHT_MIN, HEIGHT_MAX);
    }

    pub fn set_show_forces(&mut self, on: bool) {
        self.show_forces = on;
    }

    pub fn set_show_field_lines(&mut self, on: bool) {
        self.show_field_lines = on;
    }
}
