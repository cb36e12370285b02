use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameRGBA;
use crate::foundation::error::{SlideError, SlideResult};

/// Quantizer speed used when none is configured (1 = best quality, 30 = fastest).
pub const DEFAULT_QUANTIZE_SPEED: i32 = 10;

/// Options for [`GifSink`].
#[derive(Debug, Clone)]
pub struct GifSinkOpts {
    /// Destination file. An existing file is replaced.
    pub out_path: PathBuf,
    /// NeuQuant speed for per-frame palettes, `1..=30`.
    pub quantize_speed: i32,
}

impl GifSinkOpts {
    /// Default options writing to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            quantize_speed: DEFAULT_QUANTIZE_SPEED,
        }
    }
}

/// Writes frames to an infinitely looping animated GIF.
///
/// Every frame gets its own quantized palette, the configured delay, and
/// [`gif::DisposalMethod::Background`] so transparent areas never show the previous frame.
pub struct GifSink {
    opts: GifSinkOpts,
    cfg: Option<SinkConfig>,
    encoder: Option<gif::Encoder<BufWriter<File>>>,
    frames_written: usize,
}

impl GifSink {
    /// Create a sink; nothing touches the filesystem until `begin`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            cfg: None,
            encoder: None,
            frames_written: 0,
        }
    }
}

/// Convert a frame duration to GIF centiseconds, rounding to nearest.
pub fn delay_centiseconds(ms: u32) -> u16 {
    (ms.saturating_add(5) / 10).min(u32::from(u16::MAX)) as u16
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> SlideResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(SlideError::validation("gif width/height must be non-zero"));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(SlideError::validation(format!(
                "gif frames are limited to {max}x{max}, got {}x{}",
                cfg.width,
                cfg.height,
                max = u16::MAX
            )));
        }
        if !(1..=30).contains(&self.opts.quantize_speed) {
            return Err(SlideError::argument(format!(
                "quantize speed must be in 1..=30, got {}",
                self.opts.quantize_speed
            )));
        }

        let path = &self.opts.out_path;
        let file = File::create(path).map_err(|e| {
            SlideError::encode(format!("create output '{}': {e}", path.display()))
        })?;
        let mut encoder =
            gif::Encoder::new(BufWriter::new(file), cfg.width as u16, cfg.height as u16, &[])?;
        encoder.set_repeat(gif::Repeat::Infinite)?;

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &FrameRGBA) -> SlideResult<()> {
        let (Some(cfg), Some(encoder)) = (self.cfg, self.encoder.as_mut()) else {
            return Err(SlideError::encode("gif sink is not started"));
        };
        if frame.size() != (cfg.width, cfg.height) {
            return Err(SlideError::validation(format!(
                "frame {idx} is {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != (cfg.width as usize) * (cfg.height as usize) * 4 {
            return Err(SlideError::validation(format!(
                "frame {idx} buffer does not match its size"
            )));
        }

        let mut rgba = frame.data.clone();
        let mut out = gif::Frame::from_rgba_speed(
            cfg.width as u16,
            cfg.height as u16,
            &mut rgba,
            self.opts.quantize_speed,
        );
        out.delay = delay_centiseconds(cfg.frame_delay_ms);
        out.dispose = gif::DisposalMethod::Background;

        encoder.write_frame(&out)?;
        self.frames_written += 1;
        tracing::trace!(idx, "gif frame written");
        Ok(())
    }

    fn end(&mut self) -> SlideResult<()> {
        let Some(encoder) = self.encoder.take() else {
            return Err(SlideError::encode("gif sink is not started"));
        };
        if self.frames_written == 0 {
            return Err(SlideError::encode("refusing to finish a gif with no frames"));
        }
        let mut writer = encoder
            .into_inner()
            .map_err(|e| SlideError::encode(format!("finish gif: {e}")))?;
        writer.flush().map_err(|e| {
            SlideError::encode(format!(
                "flush '{}': {e}",
                self.opts.out_path.display()
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif_sink.rs"]
mod tests;
