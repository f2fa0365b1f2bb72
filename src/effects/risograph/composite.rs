use crate::{
    effects::risograph::layer::RgbLayer,
    foundation::core::Canvas,
    foundation::error::{FxError, FxResult},
    pipeline::threading::{Exec, for_each_row},
};

/// How channel layers are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendStrategy {
    /// `a * b / 255`: overprinted ink darkens.
    Multiply,
}

impl BlendStrategy {
    /// Resolve a configured blend mode name. Unknown names fall back to multiply.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "multiply" => Self::Multiply,
            other => {
                tracing::warn!(blend_mode = other, "unsupported blend mode, using multiply");
                Self::Multiply
            }
        }
    }
}

/// Multiply-blend `layers` in order. An empty list yields paper white.
///
/// Multiplication commutes, but each step rounds to `f32`, so the order is part of the output.
pub fn composite_multiply(layers: &[RgbLayer], canvas: Canvas) -> FxResult<RgbLayer> {
    composite_multiply_with(Exec::Sequential, layers, canvas)
}

pub(crate) fn composite_multiply_with(
    exec: Exec<'_>,
    layers: &[RgbLayer],
    canvas: Canvas,
) -> FxResult<RgbLayer> {
    let Some((first, rest)) = layers.split_first() else {
        return RgbLayer::white(canvas);
    };
    if layers.iter().any(|l| l.canvas() != canvas) {
        return Err(FxError::validation(
            "composite_multiply expects layers matching the canvas",
        ));
    }

    let mut out = first.clone();
    let row_len = out.row_len();
    for_each_row(exec, out.data_mut(), row_len, |y, row| {
        for layer in rest {
            let src = &layer.data()[y * row_len..(y + 1) * row_len];
            for (d, s) in row.iter_mut().zip(src) {
                *d = ((f64::from(*d) * f64::from(*s)) / 255.0) as f32;
            }
        }
    });
    Ok(out)
}

#[cfg(test)]
#[path = "../../../tests/unit/effects/risograph/composite.rs"]
mod tests;
