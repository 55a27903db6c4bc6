use super::constants::{DOLLY_DIVISOR, DOLLY_Z_START};

/// Raw document scroll metrics, as reported by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub document_scroll_top: f64,
    pub body_scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Rounded scroll percentage for the page, or `None` when the page has no
/// scrollable range.
///
/// Values can land slightly outside 0..=100 at the page edges (elastic
/// scrolling, fractional metrics); no clamping is applied.
pub fn scroll_percent(m: ScrollMetrics) -> Option<i32> {
    let range = m.scroll_height - m.client_height;
    if !(range > 0.0) {
        return None;
    }
    // Halves round toward +inf, so -0.5 lands on 0 rather than -1.
    let pct = ((m.document_scroll_top + m.body_scroll_top) / range * 100.0 + 0.5).floor();
    pct.is_finite().then_some(pct as i32)
}

/// Camera z for a scroll percentage, or `None` when the value is below the
/// dolly range and the camera should stay where it is.
#[inline]
pub fn dolly_z(scroll: i32) -> Option<f32> {
    (scroll > -1).then(|| DOLLY_Z_START - scroll as f32 / DOLLY_DIVISOR)
}
