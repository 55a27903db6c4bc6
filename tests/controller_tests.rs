// Host-side tests for the projector controller and the scroll-driven camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod controller {
        include!("../src/core/controller.rs");
    }
}

use core::controller::SceneController;
use core::scene::{assemble, SlideIndex};
use glam::Vec3;

fn make_controller() -> SceneController {
    SceneController::new(assemble(16.0 / 9.0))
}

fn map_name(c: &SceneController) -> Option<&'static str> {
    c.scene().projector.map.map(|s| s.file_name())
}

#[test]
fn starts_on_slide_five_with_projector_off() {
    let c = make_controller();
    assert_eq!(c.slide().get(), 5);
    assert!(!c.projector_on());
    assert_eq!(c.projector_intensity(), 0.0);
    assert_eq!(map_name(&c), Some("5.jpg"));
    assert_eq!(c.scroll_value(), 0);
}

#[test]
fn next_follows_cyclic_law() {
    let mut c = make_controller();
    for k in 1..=23u32 {
        let slide = c.next();
        let expected = ((5 + k - 1) % 5) + 1;
        assert_eq!(slide.get() as u32, expected, "after {k} next() calls");
        assert_eq!(c.slide(), slide);
    }
}

#[test]
fn previous_follows_cyclic_law() {
    let mut c = make_controller();
    for k in 1..=23i32 {
        let slide = c.previous();
        let expected = (5 - k - 1).rem_euclid(5) + 1;
        assert_eq!(slide.get() as i32, expected, "after {k} previous() calls");
    }
}

#[test]
fn wrap_is_circular_not_clamped() {
    let mut c = make_controller();
    assert_eq!(c.next().get(), 1);
    assert_eq!(c.previous().get(), 5);
    for _ in 0..4 {
        c.previous();
    }
    assert_eq!(c.slide().get(), 1);
    assert_eq!(c.previous().get(), 5);
}

#[test]
fn toggle_is_its_own_inverse() {
    let mut c = make_controller();
    c.toggle();
    assert!(c.projector_on());
    assert_eq!(c.projector_intensity(), 5.0);
    c.toggle();
    assert!(!c.projector_on());
    assert_eq!(c.projector_intensity(), 0.0);

    // And from the on state
    c.toggle();
    let (on, intensity) = (c.projector_on(), c.projector_intensity());
    c.toggle();
    c.toggle();
    assert_eq!(c.projector_on(), on);
    assert_eq!(c.projector_intensity(), intensity);
}

#[test]
fn toggle_does_not_touch_the_slide() {
    let mut c = make_controller();
    c.next();
    c.toggle();
    assert_eq!(c.slide().get(), 1);
    assert_eq!(map_name(&c), Some("1.jpg"));
}

#[test]
fn selecting_updates_map_while_off() {
    let mut c = make_controller();
    assert!(!c.projector_on());
    c.next();
    assert_eq!(map_name(&c), Some("1.jpg"));
    c.next();
    assert_eq!(map_name(&c), Some("2.jpg"));
    c.previous();
    assert_eq!(map_name(&c), Some("1.jpg"));
    assert_eq!(c.projector_intensity(), 0.0);
}

#[test]
fn selecting_updates_map_while_on() {
    let mut c = make_controller();
    c.toggle();
    c.previous();
    assert_eq!(map_name(&c), Some("4.jpg"));
    assert_eq!(c.projector_intensity(), 5.0);
}

#[test]
fn end_to_end_projector_session() {
    let mut c = make_controller();

    assert_eq!(c.previous().get(), 4);
    assert_eq!(map_name(&c), Some("4.jpg"));
    assert_eq!(c.projector_intensity(), 0.0);

    c.toggle();
    assert_eq!(c.projector_intensity(), 5.0);

    let seen: Vec<u8> = (0..6).map(|_| c.next().get()).collect();
    assert_eq!(seen, vec![5, 1, 2, 3, 4, 5]);
    assert_eq!(c.slide().get(), 5);
    assert_eq!(map_name(&c), Some("5.jpg"));
    assert_eq!(c.projector_intensity(), 5.0);
}

#[test]
fn update_camera_applies_dolly_formula() {
    let mut c = make_controller();
    for scroll in [0, 1, 17, 50, 51, 99, 100, 102] {
        c.set_scroll_value(scroll);
        c.update_camera();
        let expected = 100.0 - scroll as f32 / 1.02;
        assert_eq!(c.scene().camera.position.z, expected, "scroll {scroll}");
    }
}

#[test]
fn update_camera_ignores_out_of_range_scroll() {
    let mut c = make_controller();
    c.set_scroll_value(-1);
    c.update_camera();
    assert_eq!(c.scene().camera.position.z, 25.0);

    c.set_scroll_value(40);
    c.update_camera();
    let z = c.scene().camera.position.z;
    c.set_scroll_value(-7);
    c.update_camera();
    assert_eq!(c.scene().camera.position.z, z);
}

#[test]
fn update_camera_only_moves_along_z_and_faces_target() {
    let mut c = make_controller();
    c.set_scroll_value(30);
    c.update_camera();
    let cam = &c.scene().camera;
    assert_eq!(cam.position.x, 0.0);
    assert_eq!(cam.position.y, 1.5);
    assert_eq!(cam.target, Vec3::new(0.0, 2.0, 0.0));
}

#[test]
fn resize_matches_viewport_aspect() {
    let mut c = make_controller();
    c.resize(1920.0, 1080.0);
    assert_eq!(c.scene().camera.aspect, 1920.0 / 1080.0);
    c.resize(390.0, 844.0);
    assert_eq!(c.scene().camera.aspect, 390.0 / 844.0);
    // Degenerate sizes are ignored
    c.resize(800.0, 0.0);
    assert_eq!(c.scene().camera.aspect, 390.0 / 844.0);
}

#[test]
fn slide_indices_cover_one_to_five() {
    let numbers: Vec<u8> = SlideIndex::all().map(|s| s.get()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    let names: Vec<&str> = SlideIndex::all().map(|s| s.file_name()).collect();
    assert_eq!(names, vec!["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg"]);
}
