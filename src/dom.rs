use crate::core::{backing_size, ScrollMetrics};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let added = el
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_ok();
    closure.forget();
    added
}

#[inline]
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Viewport size in CSS pixels (`innerWidth`, `innerHeight`).
pub fn viewport_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Size the canvas to the viewport: CSS size in CSS pixels, backing store
/// in device pixels.
pub fn fit_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    let Some(w) = web::window() else {
        return;
    };
    let Some((width, height)) = viewport_size() else {
        return;
    };
    let style = canvas.style();
    _ = style.set_property("width", &format!("{width}px"));
    _ = style.set_property("height", &format!("{height}px"));
    _ = style.set_property("display", "block");
    let (backing_w, backing_h) = backing_size(width, height, w.device_pixel_ratio());
    canvas.set_width(backing_w);
    canvas.set_height(backing_h);
}

pub fn scroll_metrics(document: &web::Document) -> ScrollMetrics {
    let (document_scroll_top, scroll_height, client_height) = document
        .document_element()
        .map(|el| {
            (
                el.scroll_top() as f64,
                el.scroll_height() as f64,
                el.client_height() as f64,
            )
        })
        .unwrap_or_default();
    let body_scroll_top = document
        .body()
        .map(|b| b.scroll_top() as f64)
        .unwrap_or(0.0);
    ScrollMetrics {
        document_scroll_top,
        body_scroll_top,
        scroll_height,
        client_height,
    }
}
