// DOM ids and pointer tuning for the web frontend.

pub const CANVAS_ID: &str = "scene-canvas";
pub const HEIGHT_SLIDER_ID: &str = "height-slider";
pub const HEIGHT_READOUT_ID: &str = "height-readout";
pub const SHOW_FORCES_ID: &str = "toggle-forces";
pub const SHOW_FIELD_LINES_ID: &str = "toggle-field-lines";

pub const ROTATE_SPEED: f32 = 0.005; // radians per CSS pixel dragged
pub const PAN_SPEED: f32 = 0.0015; // scene units per pixel, scaled by distance
pub const ZOOM_SPEED: f32 = 0.001; // proportional dolly per wheel delta unit
