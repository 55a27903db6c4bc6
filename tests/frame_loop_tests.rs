// Host-side tests for render-loop bookkeeping and viewport sizing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod animation {
        include!("../src/core/animation.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use core::animation::{LoopState, StopOutcome};
use core::viewport::{backing_size, surface_resize};

#[test]
fn new_loop_is_running_with_nothing_pending() {
    let mut state = LoopState::new();
    assert!(state.is_running());
    assert_eq!(state.stop(), StopOutcome::Stopped { cancel: None });
}

#[test]
fn stop_cancels_the_pending_frame_once() {
    let mut state = LoopState::new();
    state.scheduled(7);
    assert_eq!(state.stop(), StopOutcome::Stopped { cancel: Some(7) });
    assert!(!state.is_running());
    assert_eq!(state.stop(), StopOutcome::AlreadyStopped);
    assert_eq!(state.stop(), StopOutcome::AlreadyStopped);
}

#[test]
fn fired_frame_clears_pending_id() {
    let mut state = LoopState::new();
    state.scheduled(3);
    assert!(state.begin_frame());
    // Nothing left to cancel between frames.
    assert_eq!(state.stop(), StopOutcome::Stopped { cancel: None });
}

#[test]
fn stopped_loop_skips_frames_and_ignores_requests() {
    let mut state = LoopState::new();
    state.scheduled(1);
    state.stop();
    assert!(!state.begin_frame());
    state.scheduled(2);
    assert_eq!(state.stop(), StopOutcome::AlreadyStopped);
    assert!(!state.is_running());
}

#[test]
fn frame_sequence_tracks_latest_request() {
    let mut state = LoopState::new();
    for id in 1..=5 {
        state.scheduled(id);
        assert!(state.begin_frame());
    }
    state.scheduled(6);
    assert_eq!(state.stop(), StopOutcome::Stopped { cancel: Some(6) });
}

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(1280.0, 720.0, 1.0), (1280, 720));
    assert_eq!(backing_size(1280.0, 720.0, 2.0), (2560, 1440));
    assert_eq!(backing_size(390.0, 844.0, 1.5), (585, 1266));
    // Fractional device pixels truncate.
    assert_eq!(backing_size(100.5, 10.0, 1.0), (100, 10));
}

#[test]
fn backing_size_never_collapses() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(800.0, 600.0, 0.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, f64::NAN), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, -3.0), (800, 600));
}

#[test]
fn surface_follows_canvas_changes_only() {
    assert_eq!(surface_resize((800, 600), (800, 600)), None);
    assert_eq!(surface_resize((800, 600), (1024, 600)), Some((1024, 600)));
    assert_eq!(surface_resize((800, 600), (800, 601)), Some((800, 601)));
    assert_eq!(surface_resize((800, 600), (0, 600)), None);
    assert_eq!(surface_resize((800, 600), (800, 0)), None);
}
