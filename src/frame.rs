use crate::core::{Assets, LoopState, SceneController, StopOutcome};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<SceneController>>,
    pub assets: Rc<RefCell<Assets>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    /// One display frame: draw the scene as it stands, then move the camera
    /// for the next one.
    pub fn frame(&mut self) {
        if let Some(g) = &mut self.gpu {
            g.sync_assets(&self.assets.borrow());
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(self.controller.borrow().scene()) {
                log::error!("render error: {:?}", e);
            }
        }
        self.controller.borrow_mut().update_camera();
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    controller: &Rc<RefCell<SceneController>>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let scene = controller.borrow().scene().clone();
    match render::GpuState::new(leaked_canvas, &scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Handle to a running animation-frame loop.
#[derive(Clone)]
pub struct LoopHandle {
    state: Rc<RefCell<LoopState>>,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }

    /// Cancel the pending frame and stop rescheduling. Idempotent.
    pub fn stop(&self) {
        let outcome = self.state.borrow_mut().stop();
        if let StopOutcome::Stopped { cancel } = outcome {
            if let (Some(id), Some(w)) = (cancel, web::window()) {
                _ = w.cancel_animation_frame(id);
            }
            log::info!("[loop] stopped");
        }
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>, state: &RefCell<LoopState>) {
    if let Some(w) = web::window() {
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => state.borrow_mut().scheduled(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let handle = LoopHandle {
        state: Rc::new(RefCell::new(LoopState::new())),
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let run = handle_tick.state.borrow_mut().begin_frame();
        if !run {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if !handle_tick.is_running() {
            return;
        }
        if let Some(next) = tick_clone.borrow().as_ref() {
            request_frame(next, &handle_tick.state);
        }
    }) as Box<dyn FnMut()>));
    if let Some(first) = tick.borrow().as_ref() {
        request_frame(first, &handle.state);
    }
    handle
}
