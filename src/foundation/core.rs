use crate::foundation::error::{FxError, FxResult};

/// Pixel dimensions of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas from explicit dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels, `width * height`.
    pub fn pixel_count(self) -> FxResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(|| FxError::validation("canvas pixel count overflows usize"))
    }

    /// Byte length of an RGBA8 buffer covering this canvas.
    pub fn rgba_len(self) -> FxResult<usize> {
        self.pixel_count()?
            .checked_mul(4)
            .ok_or_else(|| FxError::validation("canvas rgba8 byte length overflows usize"))
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An opaque 8-bit ink color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components in `[r, g, b]` order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Whole-pixel registration offset of a print channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Offset {
    /// Horizontal shift; positive moves ink to the right.
    pub x: i32,
    /// Vertical shift; positive moves ink down.
    pub y: i32,
}

impl Offset {
    /// Build an offset from components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Owned straight-alpha RGBA8 frame, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Wrap an existing buffer, validating its length against the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> FxResult<Self> {
        let expected = Canvas::new(width, height).rgba_len()?;
        if data.len() != expected {
            return Err(FxError::validation(format!(
                "rgba8 buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A frame where every pixel is `px`.
    pub fn filled(width: u32, height: u32, px: [u8; 4]) -> FxResult<Self> {
        let count = Canvas::new(width, height).pixel_count()?;
        Ok(Self {
            width,
            height,
            data: px.repeat(count),
        })
    }

    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// The RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
