#![cfg(target_arch = "wasm32")]

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod panel;
mod render;

use std::cell::RefCell;
use std::rc::Rc;

use maglev_core::{OrbitCamera, SceneClock, SceneState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("maglev-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    // Shared scene state + camera, mutated by the panel and pointer events
    // and read on every animation frame.
    let state = Rc::new(RefCell::new(SceneState::default()));
    let camera = Rc::new(RefCell::new(OrbitCamera::default()));

    panel::wire_controls(&document, state.clone());
    events::wire_orbit_controls(&canvas, camera.clone());
    let labels = labels::LabelLayer::new(&document);

    let gpu = frame::init_gpu(&canvas)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable"))?;

    let ctx = frame::FrameContext {
        state,
        camera,
        canvas,
        labels,
        gpu,
        clock: SceneClock::start(),
        instances: Vec::with_capacity(32),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
