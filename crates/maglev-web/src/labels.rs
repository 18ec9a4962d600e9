//! DOM-projected text overlay.
//!
//! The info and force labels live as absolutely-positioned elements in a
//! layer over the canvas; each frame their world anchors are projected to
//! CSS pixels and applied as a transform. Labels whose anchor is gone
//! this frame (toggled off, or behind the camera) are hidden.

use fnv::FnvHashMap;
use maglev_core::{label_anchors, label_text, LabelKind, OrbitCamera, SceneState};
use wasm_bindgen::JsCast;
use web_sys as web;

const LABEL_IDS: [(LabelKind, &str); 5] = [
    (LabelKind::Mass, "label-mass"),
    (LabelKind::Height, "label-height"),
    (LabelKind::FieldCaption, "label-field"),
    (LabelKind::GravityForce, "label-fg"),
    (LabelKind::MagneticForce, "label-fm"),
];

#[inline]
pub fn css_translate(x: f32, y: f32) -> String {
    format!("translate({x:.0}px, {y:.0}px)")
}

pub struct LabelLayer {
    elements: FnvHashMap<LabelKind, web::HtmlElement>,
}

impl LabelLayer {
    pub fn new(document: &web::Document) -> Self {
        let mut elements = FnvHashMap::default();
        for (kind, id) in LABEL_IDS {
            if let Some(el) = document.get_element_by_id(id) {
                if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                    elements.insert(kind, el);
                }
            }
        }
        Self { elements }
    }

    pub fn update(
        &self,
        camera: &OrbitCamera,
        state: &SceneState,
        canvas: &web::HtmlCanvasElement,
    ) {
        // Position in CSS pixels; the layer shares the canvas' box.
        let rect = canvas.get_bounding_client_rect();
        let (width, height) = (rect.width() as f32, rect.height() as f32);

        for el in self.elements.values() {
            let _ = el.style().set_property("display", "none");
        }
        for (kind, world) in label_anchors(state) {
            let Some(el) = self.elements.get(&kind) else {
                continue;
            };
            if let Some(px) = camera.project_to_screen(world, width, height) {
                let _ = el.style().set_property("display", "block");
                let _ = el.style().set_property("transform", &css_translate(px.x, px.y));
                el.set_text_content(Some(&label_text(kind, state)));
            }
        }
    }
}
