use crate::{
    foundation::core::Canvas,
    foundation::error::{FxError, FxResult},
    pipeline::threading::{Exec, for_each_row},
};

/// BT.601 luma weights for R, G and B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Per-pixel brightness in `[0, 1]` from the RGB of an RGBA8 buffer. Alpha is ignored.
pub fn luminance_plane(pixels: &[u8], canvas: Canvas) -> FxResult<Vec<f32>> {
    luminance_plane_with(Exec::Sequential, pixels, canvas)
}

pub(crate) fn luminance_plane_with(
    exec: Exec<'_>,
    pixels: &[u8],
    canvas: Canvas,
) -> FxResult<Vec<f32>> {
    let expected = canvas.rgba_len()?;
    if pixels.len() != expected {
        return Err(FxError::validation(
            "luminance_plane expects pixels matching width*height*4",
        ));
    }

    let w = canvas.width as usize;
    let mut lum = vec![0.0f32; canvas.pixel_count()?];
    for_each_row(exec, &mut lum, w, |y, row| {
        let src = &pixels[y * w * 4..(y + 1) * w * 4];
        for (dst, px) in row.iter_mut().zip(src.chunks_exact(4)) {
            *dst = luma(px[0], px[1], px[2]);
        }
    });
    Ok(lum)
}

fn luma(r: u8, g: u8, b: u8) -> f32 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    ((wr * f64::from(r) + wg * f64::from(g) + wb * f64::from(b)) / 255.0) as f32
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/risograph/luminance.rs"]
mod tests;
