/// Canvas backing-store size in device pixels for a viewport measured in CSS
/// pixels. Non-finite or non-positive ratios count as 1; never below 1x1.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let px = |css: f64| (css * dpr).floor().max(1.0) as u32;
    (px(css_width), px(css_height))
}

/// Surface size to switch to when the canvas backing store changed, or `None`
/// when it still matches `current` or is empty.
#[inline]
pub fn surface_resize(current: (u32, u32), canvas: (u32, u32)) -> Option<(u32, u32)> {
    let (width, height) = canvas;
    (width > 0 && height > 0 && canvas != current).then_some(canvas)
}
