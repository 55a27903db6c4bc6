use crate::constants::{photo_url, MODEL_URL};
use crate::core::{decode_image, decode_model, Assets, LoadError, SlideIndex, SLIDE_COUNT};
use glam::Mat4;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    let fetch_err = |e: wasm_bindgen::JsValue| LoadError::Fetch {
        url: url.to_string(),
        reason: format!("{:?}", e),
    };
    let window = web::window().ok_or_else(|| LoadError::Fetch {
        url: url.to_string(),
        reason: "no window".to_string(),
    })?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(fetch_err)?;
    if !resp.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode the statue, publishing the outcome into `assets`.
/// Failure is logged and leaves the scene without a model.
pub fn spawn_model_load(assets: Rc<RefCell<Assets>>, placement: Mat4) {
    spawn_local(async move {
        let started = Instant::now();
        let result = match fetch_bytes(MODEL_URL).await {
            Ok(bytes) => decode_model(&bytes, placement),
            Err(e) => Err(e),
        };
        match &result {
            Ok(model) => log::info!(
                "[assets] model {} ready: {} primitives in {} ms",
                MODEL_URL,
                model.primitives.len(),
                started.elapsed().as_millis()
            ),
            Err(e) => log::error!("[assets] an error occurred loading {}: {}", MODEL_URL, e),
        }
        assets.borrow_mut().resolve_model(result);
    });
}

/// Fetch and decode every gobo image independently.
pub fn spawn_texture_loads(assets: Rc<RefCell<Assets>>) {
    for slide in SlideIndex::all() {
        let assets = assets.clone();
        spawn_local(async move {
            let url = photo_url(slide.file_name());
            let result = match fetch_bytes(&url).await {
                Ok(bytes) => decode_image(&bytes),
                Err(e) => Err(e),
            };
            match &result {
                Ok(img) => log::debug!("[assets] {} ready ({}x{})", url, img.width, img.height),
                Err(e) => log::warn!("[assets] {} failed: {}", url, e),
            }
            let mut store = assets.borrow_mut();
            store.resolve_texture(slide, result);
            let ready = store.textures.ready_count();
            if ready == SLIDE_COUNT as usize {
                log::info!("[assets] all {} slides ready", ready);
            }
        });
    }
}
