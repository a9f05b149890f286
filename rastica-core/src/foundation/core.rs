use crate::foundation::error::{RasticaError, RasticaResult};

pub use kurbo::Point;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels, must be > 0.
    pub width: u32,
    /// Height in pixels, must be > 0.
    pub height: u32,
}

impl Canvas {
    /// Validate and build a canvas.
    ///
    /// Rejects zero dimensions and sizes whose RGBA8 byte length would not
    /// fit in `usize`.
    pub fn new(width: u32, height: u32) -> RasticaResult<Self> {
        if width == 0 || height == 0 {
            return Err(RasticaError::validation("Canvas dimensions must be > 0"));
        }
        let canvas = Self { width, height };
        if canvas.checked_byte_len().is_none() {
            return Err(RasticaError::validation(format!(
                "Canvas {width}x{height} byte size overflows"
            )));
        }
        Ok(canvas)
    }

    /// Number of pixels on the canvas.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// RGBA8 buffer length in bytes, if it fits in `usize`.
    pub fn checked_byte_len(self) -> Option<usize> {
        usize::try_from(self.pixel_count().checked_mul(4)?).ok()
    }
}

/// Straight (non-premultiplied) RGBA8 device color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// True when the color contributes nothing when blended.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Channels as `[r, g, b, a]` bytes in buffer order.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
