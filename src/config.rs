use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::encode::gif_sink::DEFAULT_QUANTIZE_SPEED;
use crate::foundation::core::ResizeSpec;
use crate::foundation::error::{SlideError, SlideResult};
use crate::overlay::Overlay;

/// Display time of each frame when none is configured.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 400;
/// Transition frames between consecutive images when none is configured.
pub const DEFAULT_TRANSITION_STEPS: u32 = 5;

/// Everything that shapes a run except the input directory and output path.
///
/// Loadable from JSON; missing fields take their defaults:
///
/// ```json
/// {
///   "frame_duration_ms": 500,
///   "resize": "500x500",
///   "transition_steps": 3,
///   "overlay": { "kind": "centered_quote", "font_size": 40 },
///   "seed": 42
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineOpts {
    /// Display time of every frame, in milliseconds.
    pub frame_duration_ms: u32,
    /// Stretch every source image to this size.
    pub resize: Option<ResizeSpec>,
    /// Synthesized cross-fade frames between each pair of source images.
    pub transition_steps: u32,
    /// Text drawn on every source frame.
    pub overlay: Overlay,
    /// Font file path or installed family name for the overlay.
    pub font: Option<String>,
    /// Seed for quote and color picks; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// GIF quantizer speed, `1..=30`.
    pub quantize_speed: i32,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self {
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            resize: None,
            transition_steps: DEFAULT_TRANSITION_STEPS,
            overlay: Overlay::None,
            font: None,
            seed: None,
            quantize_speed: DEFAULT_QUANTIZE_SPEED,
        }
    }
}

impl PipelineOpts {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SlideResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SlideError::argument(format!("parse options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SlideResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SlideError::argument(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check ranges that would otherwise fail halfway through a run.
    pub fn validate(&self) -> SlideResult<()> {
        if !(1..=30).contains(&self.quantize_speed) {
            return Err(SlideError::argument(format!(
                "quantize speed must be in 1..=30, got {}",
                self.quantize_speed
            )));
        }
        self.overlay.validate()
    }

    /// Source frames plus transitions for `sources` input images.
    pub fn total_frames(&self, sources: usize) -> usize {
        let steps = self.transition_steps as usize;
        sources + sources.saturating_sub(1) * steps
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
