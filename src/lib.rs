#![cfg(target_arch = "wasm32")]
use crate::core::{assemble, Assets, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod loader;
mod render;

thread_local! {
    static RENDER_LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("candle-shrine starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the render loop. The last frame stays on screen.
#[wasm_bindgen]
pub fn stop_render_loop() {
    RENDER_LOOP.with(|slot| {
        if let Some(handle) = slot.borrow().as_ref() {
            handle.stop();
        }
    });
}

/// Whether the render loop is currently scheduling frames.
#[wasm_bindgen]
pub fn render_loop_running() -> bool {
    RENDER_LOOP.with(|slot| slot.borrow().as_ref().is_some_and(|h| h.is_running()))
}

fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(constants::CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CONTAINER_ID))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::fit_canvas_to_viewport(&canvas);
    Ok(canvas)
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = create_canvas(&document)?;

    let (vw, vh) = dom::viewport_size().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
    let scene = assemble((vw / vh.max(1.0)) as f32);
    log::info!(
        "[scene] assembled: {} candles, projector slide {:?}",
        scene.candles.len(),
        scene.projector.map.map(|s| s.file_name())
    );
    let model_placement = scene.model.transform();
    let controller = Rc::new(RefCell::new(SceneController::new(scene)));

    // Out-of-band loads; the renderer picks them up as they become ready.
    let assets = Rc::new(RefCell::new(Assets::new()));
    loader::spawn_model_load(assets.clone(), model_placement);
    loader::spawn_texture_loads(assets.clone());

    events::wire_projector_buttons(&document, controller.clone(), assets.clone());
    events::wire_scroll(controller.clone());
    events::wire_resize(canvas.clone(), controller.clone());

    let gpu = frame::init_gpu(&canvas, &controller).await;
    if let Some(g) = &gpu {
        let (w, h) = g.size();
        log::info!("[gpu] ready at {}x{}", w, h);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        assets,
        canvas,
        gpu,
    }));
    let handle = frame::start_loop(frame_ctx);
    RENDER_LOOP.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}
