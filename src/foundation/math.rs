/// Linear interpolation between two channel values, rounded to nearest.
pub(crate) fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

/// Source-over of a premultiplied pixel onto a straight-alpha pixel.
///
/// Returns straight alpha. Used to composite rasterized text layers (which `tiny-skia` produces
/// premultiplied) onto decoded frames.
pub(crate) fn over_premul_onto_straight(dst: [u8; 4], src_premul: [u8; 4]) -> [u8; 4] {
    if src_premul[3] == 0 {
        return dst;
    }

    let sa = f32::from(src_premul[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let dst_weight = da * (1.0 - sa);
    let out_a = sa + dst_weight;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let sc = f32::from(src_premul[i]) / 255.0;
        let dc = f32::from(dst[i]) / 255.0;
        let c = (sc + dc * dst_weight) / out_a;
        out[i] = (c * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
