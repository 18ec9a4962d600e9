pub mod animate;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod format;
pub mod mesh;
pub mod scene;
pub mod state;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animate::*;
pub use camera::OrbitCamera;
pub use clock::SceneClock;
pub use constants::*;
pub use scene::{build_scene, label_anchors, label_text, Instance, LabelKind};
pub use state::SceneState;
