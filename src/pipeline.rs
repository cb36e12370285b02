//! The collect → build → transition → encode pipeline.

use std::path::{Path, PathBuf};

use crate::assets::collect::collect_inputs;
use crate::assets::decode::load_frame;
use crate::assets::font::{FontResolution, ResolvedFont, resolve_font};
use crate::config::PipelineOpts;
use crate::effects::transitions::fade_transition;
use crate::encode::gif_sink::{GifSink, GifSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameRGBA;
use crate::foundation::error::{SlideError, SlideResult};
use crate::overlay::apply_overlay;
use crate::overlay::chooser::{Chooser, RngChooser};

/// Frames in playback order: `A, fades(A→B), B, fades(B→C), C, ...`.
#[derive(Clone, Debug, Default)]
pub struct FrameSequence {
    frames: Vec<FrameRGBA>,
    sources: usize,
    transitions: usize,
}

impl FrameSequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty sequence with room for `frames` frames.
    pub fn with_capacity(frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(frames),
            ..Self::default()
        }
    }

    /// Append a built source frame, preceded by the transition frames from the previous source.
    ///
    /// The transitions are generated from the last source frame and `frame` only.
    pub fn push_source(&mut self, frame: FrameRGBA, transition_steps: u32) -> SlideResult<()> {
        if let Some(prev) = self.last_source() {
            let fades = fade_transition(prev, &frame, transition_steps)?;
            self.transitions += fades.len();
            self.frames.extend(fades);
        }
        self.frames.push(frame);
        self.sources += 1;
        Ok(())
    }

    fn last_source(&self) -> Option<&FrameRGBA> {
        // A source frame is always the last frame pushed.
        self.frames.last()
    }

    /// All frames in playback order.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    /// Total frame count.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` before the first source frame is pushed.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of source frames.
    pub fn source_count(&self) -> usize {
        self.sources
    }

    /// Number of synthesized transition frames.
    pub fn transition_count(&self) -> usize {
        self.transitions
    }

    /// Hand every frame to `sink`, framed by `begin` and `end`.
    ///
    /// The sink size is taken from the first frame. An empty sequence is a validation error.
    pub fn encode(&self, frame_delay_ms: u32, sink: &mut dyn FrameSink) -> SlideResult<()> {
        let first = self
            .frames
            .first()
            .ok_or_else(|| SlideError::validation("cannot encode an empty frame sequence"))?;
        sink.begin(SinkConfig {
            width: first.width,
            height: first.height,
            frame_delay_ms,
        })?;
        for (idx, frame) in self.frames.iter().enumerate() {
            sink.push_frame(idx, frame)?;
        }
        sink.end()
    }
}

/// Outcome of a pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    /// Input files, in the order they were used.
    pub inputs: Vec<PathBuf>,
    /// Frames handed to the sink (sources plus transitions).
    pub frame_count: usize,
    /// Synthesized transition frames among `frame_count`.
    pub transition_count: usize,
    /// How the overlay font was resolved; `None` without an overlay.
    pub font: Option<FontResolution>,
}

/// Decode, overlay and chain `paths` into a frame sequence.
///
/// `font` is required when `opts.overlay` is enabled; quote overlays draw from `chooser`.
pub fn build_sequence(
    paths: &[PathBuf],
    opts: &PipelineOpts,
    font: Option<&ResolvedFont>,
    chooser: &mut dyn Chooser,
) -> SlideResult<FrameSequence> {
    let mut seq = FrameSequence::with_capacity(opts.total_frames(paths.len()));
    for path in paths {
        let mut frame = load_frame(path, opts.resize)?;
        if opts.overlay.is_enabled() {
            let font = font.ok_or_else(|| {
                SlideError::validation("an overlay is configured but no font was resolved")
            })?;
            apply_overlay(&mut frame, &opts.overlay, font, chooser)?;
        }
        tracing::debug!(
            path = %path.display(),
            width = frame.width,
            height = frame.height,
            "source frame built"
        );
        seq.push_source(frame, opts.transition_steps)?;
    }
    Ok(seq)
}

/// Run the whole pipeline from `input_dir` into `sink`.
///
/// Fails with [`SlideError::InputEmpty`] before decoding anything when no image matches.
#[tracing::instrument(skip_all, fields(input_dir = %input_dir.display()))]
pub fn render_to_sink(
    input_dir: &Path,
    opts: &PipelineOpts,
    chooser: &mut dyn Chooser,
    sink: &mut dyn FrameSink,
) -> SlideResult<PipelineReport> {
    opts.validate()?;
    let inputs = collect_inputs(input_dir)?;
    tracing::debug!(
        count = inputs.len(),
        frames = opts.total_frames(inputs.len()),
        "input images collected"
    );

    let font = opts
        .overlay
        .is_enabled()
        .then(|| resolve_font(opts.font.as_deref()));

    let seq = build_sequence(&inputs, opts, font.as_ref(), chooser)?;
    seq.encode(opts.frame_duration_ms, sink)?;

    tracing::info!(
        frames = seq.len(),
        sources = seq.source_count(),
        transitions = seq.transition_count(),
        "frame sequence encoded"
    );

    Ok(PipelineReport {
        inputs,
        frame_count: seq.len(),
        transition_count: seq.transition_count(),
        font: font.map(|f| f.resolution().clone()),
    })
}

/// Run the pipeline and write an animated GIF to `output`.
///
/// Quote and color picks use `opts.seed` when set, OS entropy otherwise.
pub fn render_gif(
    input_dir: &Path,
    output: &Path,
    opts: &PipelineOpts,
) -> SlideResult<PipelineReport> {
    let mut chooser = match opts.seed {
        Some(seed) => RngChooser::seeded(seed),
        None => RngChooser::from_os(),
    };
    let mut sink = GifSink::new(GifSinkOpts {
        quantize_speed: opts.quantize_speed,
        ..GifSinkOpts::new(output)
    });
    render_to_sink(input_dir, opts, &mut chooser, &mut sink)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;
