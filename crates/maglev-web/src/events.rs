//! Orbit-control wiring: primary drag rotates, secondary drag pans,
//! wheel zooms. Camera mutations are read by the frame loop on the next
//! animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use maglev_core::OrbitCamera;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{PAN_SPEED, ROTATE_SPEED, ZOOM_SPEED};
use crate::input;

pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<OrbitCamera>>) {
    let drag = Rc::new(RefCell::new(input::DragState::default()));

    // pointerdown: begin a drag and capture the pointer
    {
        let drag_m = drag.clone();
        let canvas_target = canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            drag_m
                .borrow_mut()
                .begin(ev.button(), ev.client_x() as f32, ev.client_y() as f32);
            let _ = canvas_target.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove: rotate or pan depending on the pressed button
    {
        let drag_m = drag.clone();
        let camera_m = camera.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut ds = drag_m.borrow_mut();
            if !ds.active {
                return;
            }
            let (dx, dy) = ds.advance(ev.client_x() as f32, ev.client_y() as f32);
            let mut cam = camera_m.borrow_mut();
            if ds.is_pan() {
                cam.pan(dx * PAN_SPEED, dy * PAN_SPEED);
            } else {
                cam.rotate(dx * ROTATE_SPEED, -dy * ROTATE_SPEED);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup: end the drag
    {
        let drag_m = drag.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag_m.borrow_mut().end();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // wheel: dolly, keeping the page from scrolling under the canvas
    {
        let camera_m = camera.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            camera_m.borrow_mut().zoom(ev.delta_y() as f32 * ZOOM_SPEED);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // contextmenu: suppressed so the secondary drag can pan
    {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
