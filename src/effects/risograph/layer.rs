use crate::{
    effects::config::ResolvedChannel,
    foundation::core::Canvas,
    foundation::error::{FxError, FxResult},
    pipeline::threading::{Exec, for_each_row},
};

/// Paper white, the value of a layer where no ink is deposited.
pub const PAPER_WHITE: f32 = 255.0;

/// A float RGB working buffer, three `f32` per pixel, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct RgbLayer {
    canvas: Canvas,
    data: Vec<f32>,
}

impl RgbLayer {
    /// A layer of paper white.
    pub fn white(canvas: Canvas) -> FxResult<Self> {
        let len = canvas
            .pixel_count()?
            .checked_mul(3)
            .ok_or_else(|| FxError::validation("rgb layer length overflows usize"))?;
        Ok(Self {
            canvas,
            data: vec![PAPER_WHITE; len],
        })
    }

    /// Layer dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Raw `[r, g, b, r, g, b, ...]` values.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// The RGB triple at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 3]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let idx = ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 3;
        let px = self.data.get(idx..idx + 3)?;
        Some([px[0], px[1], px[2]])
    }

    pub(crate) fn row_len(&self) -> usize {
        self.canvas.width as usize * 3
    }
}

/// Render one ink drum: tint the inverted luminance with the channel color, shifted by the
/// channel offset. Destination pixels whose source falls outside the image stay paper white.
pub fn render_channel_layer(
    luminance: &[f32],
    channel: &ResolvedChannel,
    canvas: Canvas,
) -> FxResult<RgbLayer> {
    render_channel_layer_with(Exec::Sequential, luminance, channel, canvas)
}

pub(crate) fn render_channel_layer_with(
    exec: Exec<'_>,
    luminance: &[f32],
    channel: &ResolvedChannel,
    canvas: Canvas,
) -> FxResult<RgbLayer> {
    if luminance.len() != canvas.pixel_count()? {
        return Err(FxError::validation(
            "render_channel_layer expects one luminance value per pixel",
        ));
    }

    let mut layer = RgbLayer::white(canvas)?;
    let row_len = layer.row_len();
    let (w, h) = (i64::from(canvas.width), i64::from(canvas.height));
    let (ox, oy) = (i64::from(channel.offset.x), i64::from(channel.offset.y));
    let ink = channel.color.to_array().map(f64::from);

    for_each_row(exec, layer.data_mut(), row_len, |y, row| {
        let src_y = y as i64 - oy;
        if src_y < 0 || src_y >= h {
            return;
        }
        let src_row = &luminance[(src_y * w) as usize..((src_y + 1) * w) as usize];
        for (x, dst) in row.chunks_exact_mut(3).enumerate() {
            let src_x = x as i64 - ox;
            if src_x < 0 || src_x >= w {
                continue;
            }
            let density = 1.0 - f64::from(src_row[src_x as usize]);
            for (d, c) in dst.iter_mut().zip(ink) {
                *d = (255.0 - density * (255.0 - c)) as f32;
            }
        }
    });

    Ok(layer)
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/risograph/layer.rs"]
mod tests;
