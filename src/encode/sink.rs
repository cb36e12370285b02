use crate::foundation::core::FrameRGBA;
use crate::foundation::error::SlideResult;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels. Every frame has this width.
    pub width: u32,
    /// Output height in pixels. Every frame has this height.
    pub height: u32,
    /// Display time of each frame in milliseconds.
    pub frame_delay_ms: u32,
}

/// Sink contract for consuming frames in playback order.
///
/// Ordering contract: `push_frame` is called with indices `0, 1, 2, ...` between one `begin` and
/// one `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> SlideResult<()>;
    /// Push one frame in playback order.
    fn push_frame(&mut self, idx: usize, frame: &FrameRGBA) -> SlideResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> SlideResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameRGBA>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SlideResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, _idx: usize, frame: &FrameRGBA) -> SlideResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> SlideResult<()> {
        self.finished = true;
        Ok(())
    }
}
