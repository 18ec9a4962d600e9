use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Wire an `input` listener on a range control; the handler receives the
/// raw value string.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(input) = el.dyn_into::<web::HtmlInputElement>() {
            let target = input.clone();
            let closure = wasm_bindgen::closure::Closure::wrap(
                Box::new(move || handler(target.value())) as Box<dyn FnMut()>,
            );
            let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

/// Wire a `change` listener on a checkbox; the handler receives the
/// checked state.
pub fn add_toggle_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(bool) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(input) = el.dyn_into::<web::HtmlInputElement>() {
            let target = input.clone();
            let closure = wasm_bindgen::closure::Closure::wrap(
                Box::new(move || handler(target.checked())) as Box<dyn FnMut()>,
            );
            let _ =
                input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}
