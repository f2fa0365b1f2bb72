use crate::{
    foundation::core::Rgb8,
    foundation::error::{FxError, FxResult},
};

/// Parse `#RRGGBB` or `RRGGBB` (case-insensitive) into an [`Rgb8`].
///
/// A bad ink color is an authoring bug in the theme, so this is the one configuration problem
/// that fails the invocation instead of being defaulted.
pub fn parse_hex_rgb(s: &str) -> FxResult<Rgb8> {
    let hex = s.strip_prefix('#').unwrap_or(s);

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(FxError::color_format(
            s,
            "hex color must be #RRGGBB (6 hex digits)",
        ));
    }

    // `from_str_radix` alone would accept a leading '+'.
    let hex_byte = |pair: &str| -> FxResult<u8> {
        pair.bytes()
            .all(|b| b.is_ascii_hexdigit())
            .then(|| u8::from_str_radix(pair, 16).ok())
            .flatten()
            .ok_or_else(|| FxError::color_format(s, format!("invalid hex byte \"{pair}\"")))
    };

    Ok(Rgb8::new(
        hex_byte(&hex[0..2])?,
        hex_byte(&hex[2..4])?,
        hex_byte(&hex[4..6])?,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/color.rs"]
mod tests;
