use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{SlideError, SlideResult};

/// One frame as RGBA8 pixels.
///
/// Pixels are straight (not premultiplied) alpha, tightly packed, row-major. This matches what
/// the `image` decoder produces and what the GIF quantizer consumes, so frames never need to be
/// converted between pipeline stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Wrap a pixel buffer, checking that its length matches the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> SlideResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(SlideError::validation(format!(
                "frame buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A frame where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let n = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(n * 4);
        for _ in 0..n {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Take ownership of a decoded `image` buffer.
    pub fn from_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    /// Convert back into an `image` buffer.
    pub fn into_image(self) -> SlideResult<image::RgbaImage> {
        let (w, h) = (self.width, self.height);
        image::RgbaImage::from_raw(w, h, self.data).ok_or_else(|| {
            SlideError::validation(format!("frame buffer does not match {w}x{h}"))
        })
    }

    /// `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Read one pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

/// Opaque RGB color, written `#RRGGBB` in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8(pub [u8; 3]);

impl Rgb8 {
    /// `#FFFFFF`.
    pub const WHITE: Self = Self([255, 255, 255]);
    /// `#000000`.
    pub const BLACK: Self = Self([0, 0, 0]);

    /// Lowercase `#rrggbb` form, as used in SVG paint attributes.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb8 {
    type Err = SlideError;

    fn from_str(s: &str) -> SlideResult<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SlideError::argument(format!(
                "color '{s}' must be in #RRGGBB form"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| SlideError::argument(format!("color '{s}': {e}")))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = SlideError;

    fn try_from(s: String) -> SlideResult<Self> {
        s.parse()
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex().to_ascii_uppercase()
    }
}

/// Pixel position of an overlay's top-left corner. May be negative or off-frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Horizontal offset from the left edge.
    pub x: i32,
    /// Vertical offset from the top edge.
    pub y: i32,
}

impl Position {
    /// Construct a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Stretch-to-fit resize target, written `WIDTHxHEIGHT` (e.g. `400x300`).
///
/// The separator is a literal `x` (either case). Both sides must be positive integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResizeSpec {
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
}

impl ResizeSpec {
    /// Construct a validated resize target.
    pub fn new(width: u32, height: u32) -> SlideResult<Self> {
        if width == 0 || height == 0 {
            return Err(SlideError::argument(format!(
                "resize target {width}x{height} must have non-zero width and height"
            )));
        }
        Ok(Self { width, height })
    }
}

impl FromStr for ResizeSpec {
    type Err = SlideError;

    fn from_str(s: &str) -> SlideResult<Self> {
        let malformed =
            || SlideError::argument(format!("resize '{s}' must be in WIDTHxHEIGHT format"));

        let lower = s.to_ascii_lowercase();
        let mut parts = lower.split('x');
        let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let w: u32 = w.parse().map_err(|_| malformed())?;
        let h: u32 = h.parse().map_err(|_| malformed())?;
        Self::new(w, h)
    }
}

impl TryFrom<String> for ResizeSpec {
    type Error = SlideError;

    fn try_from(s: String) -> SlideResult<Self> {
        s.parse()
    }
}

impl From<ResizeSpec> for String {
    fn from(r: ResizeSpec) -> Self {
        r.to_string()
    }
}

impl fmt::Display for ResizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
