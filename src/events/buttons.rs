use crate::constants::{BUTTON_NEXT_ID, BUTTON_PREVIOUS_ID, BUTTON_TOGGLE_ID};
use crate::core::{Assets, Readiness, SceneController, SlideIndex};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn report_selection(assets: &Rc<RefCell<Assets>>, slide: SlideIndex) {
    match assets.borrow().textures.state(slide) {
        Readiness::Failed => log::warn!(
            "[projector] slide {} failed; projecting a plain cone",
            slide.file_name()
        ),
        state => log::debug!("[projector] slide {} ({})", slide.file_name(), state),
    }
}

/// Bind `left` / `play` / `right` to the projector commands.
pub fn wire_projector_buttons(
    document: &web::Document,
    controller: Rc<RefCell<SceneController>>,
    assets: Rc<RefCell<Assets>>,
) {
    let ctl = controller.clone();
    if !dom::add_click_listener(document, BUTTON_TOGGLE_ID, move || {
        let mut c = ctl.borrow_mut();
        c.toggle();
        log::debug!("[projector] on={} intensity={}", c.projector_on(), c.projector_intensity());
    }) {
        log::warn!("[projector] missing #{}", BUTTON_TOGGLE_ID);
    }

    let ctl = controller.clone();
    let assets_prev = assets.clone();
    if !dom::add_click_listener(document, BUTTON_PREVIOUS_ID, move || {
        let slide = ctl.borrow_mut().previous();
        report_selection(&assets_prev, slide);
    }) {
        log::warn!("[projector] missing #{}", BUTTON_PREVIOUS_ID);
    }

    let ctl = controller;
    if !dom::add_click_listener(document, BUTTON_NEXT_ID, move || {
        let slide = ctl.borrow_mut().next();
        report_selection(&assets, slide);
    }) {
        log::warn!("[projector] missing #{}", BUTTON_NEXT_ID);
    }
}
