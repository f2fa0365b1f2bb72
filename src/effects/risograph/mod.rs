//! Risograph print simulation.
//!
//! The effect decomposes the frame to luminance, renders one tinted and misregistered layer per
//! ink drum, multiplies the layers together, sprinkles seeded grain and writes the result back
//! into the frame's RGB. Working buffers are `f32` with `f64` arithmetic per step, which fixes the
//! rounding and therefore the output bytes.

/// Layer compositing.
pub mod composite;
/// Seeded grain.
pub mod grain;
/// Per-channel ink layers.
pub mod layer;
/// Luminance decomposition.
pub mod luminance;

use crate::{
    effects::config::RisographConfig,
    effects::risograph::composite::{BlendStrategy, composite_multiply_with},
    effects::risograph::grain::apply_grain,
    effects::risograph::layer::{RgbLayer, render_channel_layer_with},
    effects::risograph::luminance::luminance_plane_with,
    foundation::core::Canvas,
    foundation::error::{FxError, FxResult},
    foundation::math::channel_to_u8,
    pipeline::threading::{Exec, for_each_row},
};

/// Apply the risograph effect to an RGBA8 buffer in place.
///
/// Returns `Ok(false)` without touching `pixels` when the config is disabled. Channel colors are
/// resolved before any pixel is written, so a color format error leaves the buffer unchanged.
pub fn apply_risograph(
    pixels: &mut [u8],
    canvas: Canvas,
    config: &RisographConfig,
    seed: Option<&str>,
) -> FxResult<bool> {
    apply_risograph_with(Exec::Sequential, pixels, canvas, config, seed)
}

pub(crate) fn apply_risograph_with(
    exec: Exec<'_>,
    pixels: &mut [u8],
    canvas: Canvas,
    config: &RisographConfig,
    seed: Option<&str>,
) -> FxResult<bool> {
    if !config.enabled {
        return Ok(false);
    }
    if pixels.len() != canvas.rgba_len()? {
        return Err(FxError::validation(
            "apply_risograph expects pixels matching width*height*4",
        ));
    }

    let channels = config.resolve_channels()?;
    let blend = BlendStrategy::from_name(&config.blend_mode);

    let luminance = luminance_plane_with(exec, pixels, canvas)?;
    let layers = channels
        .iter()
        .map(|ch| render_channel_layer_with(exec, &luminance, ch, canvas))
        .collect::<FxResult<Vec<_>>>()?;

    let mut result = match blend {
        BlendStrategy::Multiply => composite_multiply_with(exec, &layers, canvas)?,
    };
    drop(layers);

    let grain_seed = config.grain_seed(seed);
    apply_grain(&mut result, config.grain.opacity, grain_seed)?;

    write_back(exec, pixels, &result);
    tracing::debug!(
        channels = channels.len(),
        grain_opacity = config.grain.opacity,
        grain_seed,
        "risograph applied"
    );
    Ok(true)
}

/// Round and clamp `result` into the RGB bytes of `pixels`. Alpha is left alone.
fn write_back(exec: Exec<'_>, pixels: &mut [u8], result: &RgbLayer) {
    let src_row_len = result.row_len();
    let dst_row_len = result.canvas().width as usize * 4;
    for_each_row(exec, pixels, dst_row_len, |y, row| {
        let src = &result.data()[y * src_row_len..(y + 1) * src_row_len];
        for (px, rgb) in row.chunks_exact_mut(4).zip(src.chunks_exact(3)) {
            px[0] = channel_to_u8(f64::from(rgb[0]));
            px[1] = channel_to_u8(f64::from(rgb[1]));
            px[2] = channel_to_u8(f64::from(rgb[2]));
        }
    });
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/risograph/mod.rs"]
mod tests;
