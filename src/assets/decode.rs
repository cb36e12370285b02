use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;
use image::ImageFormat;
use image::imageops::FilterType;

use crate::foundation::core::{FrameRGBA, ResizeSpec};
use crate::foundation::error::SlideResult;

/// Decode an encoded image held in memory into an RGBA8 frame.
///
/// The format is sniffed from the bytes; `hint` is used only when sniffing fails. Multi-frame
/// sources (GIF) yield their first frame.
pub fn decode_image(bytes: &[u8], hint: Option<ImageFormat>) -> SlideResult<FrameRGBA> {
    let mut reader = image::ImageReader::new(Cursor::new(bytes));
    if let Some(format) = hint {
        reader.set_format(format);
    }
    let dyn_img = reader
        .with_guessed_format()
        .context("sniff image format")?
        .decode()
        .context("decode image")?;
    Ok(FrameRGBA::from_image(dyn_img.into_rgba8()))
}

/// Read an image file, normalize it to RGBA8 and optionally stretch it to `resize`.
///
/// The file extension is the format hint for [`decode_image`].
pub fn load_frame(path: &Path, resize: Option<ResizeSpec>) -> SlideResult<FrameRGBA> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let frame = decode_image(&bytes, ImageFormat::from_path(path).ok())
        .with_context(|| format!("load image '{}'", path.display()))?;

    match resize {
        Some(target) => resize_frame(frame, target),
        None => Ok(frame),
    }
}

/// Stretch a frame to exactly `target`, ignoring the source aspect ratio.
pub fn resize_frame(frame: FrameRGBA, target: ResizeSpec) -> SlideResult<FrameRGBA> {
    if frame.size() == (target.width, target.height) {
        return Ok(frame);
    }
    let img = frame.into_image()?;
    let resized =
        image::imageops::resize(&img, target.width, target.height, FilterType::CatmullRom);
    Ok(FrameRGBA::from_image(resized))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
