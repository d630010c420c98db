/// Parallax speed from a raw `data-speed` attribute value.
///
/// Missing, unparsable or non-finite values fall back to `default`; a parse
/// never fails loudly.
#[inline]
pub fn parallax_speed(raw: Option<&str>, default: f32) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Vertical parallax offset in CSS pixels for the current scroll position.
#[inline]
pub fn parallax_offset(scroll_y: f64, speed: f32) -> f64 {
    scroll_y * speed as f64
}

/// Pointer offset within an extent as a 0-100 percentage.
///
/// A degenerate extent maps to the center so downstream tilt math stays flat.
#[inline]
pub fn pointer_percent(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        (offset / extent * 100.0).clamp(0.0, 100.0)
    } else {
        50.0
    }
}

/// Tilt rotation in degrees `(rot_x, rot_y)` for a pointer at the given
/// percentages inside a card. Zero at dead center, extreme at the corners;
/// the X rotation is sign-flipped so the card tips back as the pointer moves
/// down.
#[inline]
pub fn tilt_angles(x_pct: f64, y_pct: f64, divisor: f64) -> (f64, f64) {
    let rot_x = -((y_pct - 50.0) / divisor);
    let rot_y = (x_pct - 50.0) / divisor;
    (rot_x, rot_y)
}

/// Ripple square `(size, left, top)` in button-local coordinates: side equal
/// to the larger button dimension, centered on the click point.
#[inline]
pub fn ripple_rect(width: f64, height: f64, click_x: f64, click_y: f64) -> (f64, f64, f64) {
    let size = width.max(height);
    (size, click_x - size / 2.0, click_y - size / 2.0)
}
