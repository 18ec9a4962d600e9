//! Control panel wiring: one range slider driving the levitation height
//! and two checkboxes driving overlay visibility. Mutations land in the
//! shared state synchronously and are picked up on the next frame.

use std::cell::RefCell;
use std::rc::Rc;

use maglev_core::format::height_cm_label;
use maglev_core::SceneState;
use web_sys as web;

use crate::constants::{
    HEIGHT_READOUT_ID, HEIGHT_SLIDER_ID, SHOW_FIELD_LINES_ID, SHOW_FORCES_ID,
};
use crate::dom;

/// Parse a slider value string. The input element already clamps to its
/// min/max/step; this only rejects garbage.
#[inline]
pub fn parse_height(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

pub fn readout_text(height: f32) -> String {
    format!("Levitation height: {}", height_cm_label(height))
}

pub fn wire_controls(document: &web::Document, state: Rc<RefCell<SceneState>>) {
    {
        let st = state.clone();
        let doc = document.clone();
        dom::add_input_listener(document, HEIGHT_SLIDER_ID, move |raw| {
            if let Some(value) = parse_height(&raw) {
                st.borrow_mut().set_height(value);
                dom::set_text(&doc, HEIGHT_READOUT_ID, &readout_text(st.borrow().levitation_height));
            }
        });
    }
    {
        let st = state.clone();
        dom::add_toggle_listener(document, SHOW_FORCES_ID, move |on| {
            st.borrow_mut().set_show_forces(on);
        });
    }
    {
        let st = state.clone();
        dom::add_toggle_listener(document, SHOW_FIELD_LINES_ID, move |on| {
            st.borrow_mut().set_show_field_lines(on);
        });
    }

    // Initial readout matches the default state.
    dom::set_text(
        document,
        HEIGHT_READOUT_ID,
        &readout_text(state.borrow().levitation_height),
    );
}
