use crate::foundation::core::FrameRGBA;
use crate::foundation::error::{SlideError, SlideResult};
use crate::foundation::math::lerp_u8;

/// Blend weights of the `steps` intermediate frames between two source frames.
///
/// Weight `i` is `i / (steps + 1)` for `i` in `1..=steps`, so every weight lies strictly between
/// 0 and 1 and the sequence is evenly spaced.
pub fn fade_weights(steps: u32) -> Vec<f32> {
    let denom = steps as f32 + 1.0;
    (1..=steps).map(|i| i as f32 / denom).collect()
}

/// Per-channel linear interpolation between `a` and `b` at weight `t` (alpha included).
///
/// `t = 0` reproduces `a`, `t = 1` reproduces `b`. Frames must have the same size.
pub fn crossfade(a: &FrameRGBA, b: &FrameRGBA, t: f32) -> SlideResult<FrameRGBA> {
    if a.size() != b.size() {
        return Err(SlideError::validation(format!(
            "cannot blend a {}x{} frame with a {}x{} frame; use a resize target to make sizes match",
            a.width, a.height, b.width, b.height
        )));
    }
    if a.data.len() != b.data.len() {
        return Err(SlideError::validation(
            "crossfade expects equal-length rgba8 buffers",
        ));
    }

    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let data = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(&av, &bv)| lerp_u8(av, bv, t))
        .collect();
    FrameRGBA::new(a.width, a.height, data)
}

/// The `steps` intermediate frames that fade `a` into `b`, in playback order.
///
/// The result depends only on `a` and `b`. Zero steps yields an empty list.
pub fn fade_transition(a: &FrameRGBA, b: &FrameRGBA, steps: u32) -> SlideResult<Vec<FrameRGBA>> {
    fade_weights(steps)
        .into_iter()
        .map(|t| crossfade(a, b, t))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
