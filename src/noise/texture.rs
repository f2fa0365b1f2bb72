use crate::{
    foundation::core::Canvas,
    foundation::error::FxResult,
    noise::prng::Mulberry32,
};

/// Per-pixel noise in `[0, 1)`, row-major.
///
/// Values are stored as `f32`; the narrowing from the generator's `f64` output is part of the
/// reproducible contract.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseTexture {
    canvas: Canvas,
    values: Vec<f32>,
}

impl NoiseTexture {
    /// Draw `width * height` values from a fresh [`Mulberry32`] seeded with `seed`.
    pub fn generate(canvas: Canvas, seed: u32) -> FxResult<Self> {
        let len = canvas.pixel_count()?;
        let values = Mulberry32::new(seed).take(len).map(|v| v as f32).collect();
        Ok(Self { canvas, values })
    }

    /// Texture dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// All values, row 0 first.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        self.values
            .get((y as usize) * (self.canvas.width as usize) + (x as usize))
            .copied()
    }
}

/// Generate a `width x height` noise texture from `seed`.
pub fn generate_noise_texture(width: u32, height: u32, seed: u32) -> FxResult<NoiseTexture> {
    NoiseTexture::generate(Canvas::new(width, height), seed)
}

#[cfg(test)]
#[path = "../../tests/unit/noise/texture.rs"]
mod tests;
