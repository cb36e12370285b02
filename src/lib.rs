//! slidegif turns a folder of still images into an animated GIF.
//!
//! # Pipeline overview
//!
//! 1. **Collect**: list the input directory, keep `.png .jpg .jpeg .bmp .gif` files, sort by name
//! 2. **Build**: decode each image to RGBA8, optionally stretch it to a fixed size, draw the
//!    configured [`Overlay`]
//! 3. **Transition**: insert `n` cross-fade frames between each pair of consecutive images
//! 4. **Encode**: write every frame to an infinitely looping GIF through a [`FrameSink`]
//!
//! All frames stay in memory until the final encode. Everything runs on the calling thread.
//!
//! Randomized quote overlays draw from an injectable [`Chooser`], so runs are reproducible with
//! a seed or a scripted chooser.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod effects;
/// Encoding sinks.
pub mod encode;
mod foundation;
/// Text overlays.
pub mod overlay;
mod pipeline;

pub use crate::assets::collect::{SUPPORTED_EXTENSIONS, collect_inputs, is_supported_image};
pub use crate::assets::decode::{decode_image, load_frame, resize_frame};
pub use crate::assets::font::{FontResolution, ResolvedFont, resolve_font};
pub use crate::config::{DEFAULT_FRAME_DURATION_MS, DEFAULT_TRANSITION_STEPS, PipelineOpts};
pub use crate::effects::transitions::{crossfade, fade_transition, fade_weights};
pub use crate::encode::gif_sink::{GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::core::{FrameRGBA, Position, ResizeSpec, Rgb8};
pub use crate::foundation::error::{SlideError, SlideResult};
pub use crate::overlay::chooser::{Chooser, FnChooser, RngChooser};
pub use crate::overlay::{
    CaptionOverlay, Overlay, PositionedQuoteOverlay, QuoteOverlay, apply_overlay,
};
pub use crate::pipeline::{
    FrameSequence, PipelineReport, build_sequence, render_gif, render_to_sink,
};
