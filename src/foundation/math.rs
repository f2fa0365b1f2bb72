/// Round to nearest, ties toward positive infinity.
///
/// `f64::round` breaks ties away from zero, which disagrees for negative halves. Output bytes
/// depend on this choice, so it is fixed here.
pub(crate) fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Round then clamp a float color value into a byte. NaN maps to 0.
pub(crate) fn channel_to_u8(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    round_half_up(x).clamp(0.0, 255.0) as u8
}

/// Round a configured offset to whole pixels, saturating at the `i32` range. NaN maps to 0.
pub(crate) fn round_offset(x: f64) -> i32 {
    if x.is_nan() {
        return 0;
    }
    // `as` saturates, infinities included.
    round_half_up(x) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
