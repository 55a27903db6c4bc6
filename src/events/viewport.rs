use crate::core::{scroll_percent, SceneController};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track the page scroll percentage for the camera dolly.
pub fn wire_scroll(controller: Rc<RefCell<SceneController>>) {
    dom::add_window_listener("scroll", move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        // Pages without a scrollable range keep the last value.
        if let Some(pct) = scroll_percent(dom::scroll_metrics(&document)) {
            controller.borrow_mut().set_scroll_value(pct);
        }
    });
}

/// Keep the canvas and camera aspect matched to the viewport. The surface
/// itself follows the canvas backing size on the next frame.
pub fn wire_resize(canvas: web::HtmlCanvasElement, controller: Rc<RefCell<SceneController>>) {
    dom::add_window_listener("resize", move || {
        dom::fit_canvas_to_viewport(&canvas);
        if let Some((w, h)) = dom::viewport_size() {
            controller.borrow_mut().resize(w as f32, h as f32);
        }
    });
}
