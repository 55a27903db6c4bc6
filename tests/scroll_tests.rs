// Host-side tests for scroll percentage and the dolly mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use core::scroll::{dolly_z, scroll_percent, ScrollMetrics};

fn metrics(top: f64, body: f64, scroll_height: f64, client_height: f64) -> ScrollMetrics {
    ScrollMetrics {
        document_scroll_top: top,
        body_scroll_top: body,
        scroll_height,
        client_height,
    }
}

#[test]
fn percent_at_page_edges() {
    assert_eq!(scroll_percent(metrics(0.0, 0.0, 3000.0, 1000.0)), Some(0));
    assert_eq!(scroll_percent(metrics(2000.0, 0.0, 3000.0, 1000.0)), Some(100));
    assert_eq!(scroll_percent(metrics(1000.0, 0.0, 3000.0, 1000.0)), Some(50));
}

#[test]
fn percent_is_rounded_to_nearest() {
    assert_eq!(scroll_percent(metrics(333.0, 0.0, 2000.0, 1000.0)), Some(33));
    assert_eq!(scroll_percent(metrics(667.0, 0.0, 2000.0, 1000.0)), Some(67));
    assert_eq!(scroll_percent(metrics(4.0, 0.0, 2000.0, 1000.0)), Some(0));
}

#[test]
fn percent_rounds_halves_upward() {
    assert_eq!(scroll_percent(metrics(5.0, 0.0, 2000.0, 1000.0)), Some(1));
    assert_eq!(scroll_percent(metrics(-5.0, 0.0, 2000.0, 1000.0)), Some(0));
    assert_eq!(scroll_percent(metrics(-15.0, 0.0, 2000.0, 1000.0)), Some(-1));
}

#[test]
fn overscroll_by_half_a_percent_still_dollies() {
    let pct = scroll_percent(metrics(-5.0, 0.0, 2000.0, 1000.0)).unwrap();
    assert_eq!(dolly_z(pct), Some(100.0));
    let pct = scroll_percent(metrics(-15.0, 0.0, 2000.0, 1000.0)).unwrap();
    assert_eq!(dolly_z(pct), None);
}

#[test]
fn percent_sums_document_and_body_offsets() {
    // Browsers report the offset on one or the other.
    assert_eq!(scroll_percent(metrics(0.0, 250.0, 2000.0, 1000.0)), Some(25));
    assert_eq!(scroll_percent(metrics(100.0, 150.0, 2000.0, 1000.0)), Some(25));
}

#[test]
fn percent_is_not_clamped() {
    assert_eq!(scroll_percent(metrics(-20.0, 0.0, 2000.0, 1000.0)), Some(-2));
    assert_eq!(scroll_percent(metrics(1030.0, 0.0, 2000.0, 1000.0)), Some(103));
}

#[test]
fn non_scrollable_page_has_no_percent() {
    assert_eq!(scroll_percent(metrics(0.0, 0.0, 1000.0, 1000.0)), None);
    assert_eq!(scroll_percent(metrics(0.0, 0.0, 800.0, 1000.0)), None);
    assert_eq!(scroll_percent(metrics(0.0, 0.0, f64::NAN, 1000.0)), None);
}

#[test]
fn dolly_maps_scroll_to_z() {
    assert_eq!(dolly_z(0), Some(100.0));
    assert_eq!(dolly_z(51), Some(100.0 - 51.0 / 1.02));
    assert_eq!(dolly_z(100), Some(100.0 - 100.0 / 1.02));
    let z = dolly_z(51).unwrap();
    assert!((z - 50.0).abs() < 1e-4);
}

#[test]
fn dolly_is_monotonic_decreasing() {
    let zs: Vec<f32> = (0..=100).filter_map(dolly_z).collect();
    assert_eq!(zs.len(), 101);
    assert!(zs.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn dolly_skips_values_at_or_below_minus_one() {
    assert_eq!(dolly_z(-1), None);
    assert_eq!(dolly_z(-2), None);
    assert_eq!(dolly_z(i32::MIN), None);
}
