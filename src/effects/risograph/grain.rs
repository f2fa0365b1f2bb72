use crate::{
    effects::risograph::layer::RgbLayer,
    foundation::error::FxResult,
    noise::texture::NoiseTexture,
};

/// Largest per-channel shift at opacity 1.
pub const GRAIN_AMPLITUDE: f64 = 50.0;

/// Add monochrome seeded noise to every pixel of `image`.
///
/// Each pixel gets `(noise - 0.5) * 2 * opacity * 50` added to all three channels. Values are not
/// clamped here. `opacity <= 0` leaves the image untouched.
pub fn apply_grain(image: &mut RgbLayer, opacity: f64, seed: u32) -> FxResult<()> {
    if opacity.is_nan() || opacity <= 0.0 {
        return Ok(());
    }

    let noise = NoiseTexture::generate(image.canvas(), seed)?;
    for (px, n) in image.data_mut().chunks_exact_mut(3).zip(noise.values()) {
        let adjustment = (f64::from(*n) - 0.5) * 2.0 * opacity * GRAIN_AMPLITUDE;
        for c in px {
            *c = (f64::from(*c) + adjustment) as f32;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/risograph/grain.rs"]
mod tests;
