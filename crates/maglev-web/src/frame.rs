use std::cell::RefCell;
use std::rc::Rc;

use maglev_core::{build_scene, Instance, OrbitCamera, SceneClock, SceneState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::labels::LabelLayer;
use crate::render;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<SceneState>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub canvas: web::HtmlCanvasElement,
    pub labels: LabelLayer,
    pub gpu: render::GpuState<'a>,
    pub clock: SceneClock,
    pub instances: Vec<Instance>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let t = self.clock.elapsed_seconds();
        let state = *self.state.borrow();
        build_scene(t, &state, &mut self.instances);

        // Keep the surface sized to the canvas backing store.
        let width = self.canvas.width();
        let height = self.canvas.height();
        self.gpu.resize_if_needed(width, height);

        let camera = self.camera.borrow();
        let aspect = width as f32 / height.max(1) as f32;
        if let Err(e) = self
            .gpu
            .render(camera.view_proj(aspect), camera.eye(), &self.instances)
        {
            log::error!("render error: {:?}", e);
        }
        self.labels.update(&camera, &state, &self.canvas);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
