//! Encoding sinks.
//!
//! Sinks consume the finished frame sequence in playback order.

/// Animated GIF output.
pub mod gif_sink;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
