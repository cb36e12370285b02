use super::*;

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp_u8(0, 255, 0.0), 0);
    assert_eq!(lerp_u8(0, 255, 1.0), 255);
    assert_eq!(lerp_u8(0, 255, 0.5), 128);
    assert_eq!(lerp_u8(200, 100, 0.25), 175);
}

#[test]
fn lerp_clamps_out_of_range_weights() {
    assert_eq!(lerp_u8(10, 20, -1.0), 0);
    assert_eq!(lerp_u8(10, 20, 30.0), 255);
}

#[test]
fn over_transparent_source_is_noop() {
    let dst = [12, 34, 56, 255];
    assert_eq!(over_premul_onto_straight(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_opaque_source_replaces() {
    let dst = [12, 34, 56, 255];
    assert_eq!(
        over_premul_onto_straight(dst, [200, 100, 50, 255]),
        [200, 100, 50, 255]
    );
}

#[test]
fn over_half_alpha_mixes_on_opaque_background() {
    // 50% white (premultiplied 128) over opaque black.
    let out = over_premul_onto_straight([0, 0, 0, 255], [128, 128, 128, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
}

#[test]
fn over_onto_transparent_destination_unpremultiplies() {
    let out = over_premul_onto_straight([0, 0, 0, 0], [64, 0, 0, 128]);
    assert_eq!(out[3], 128);
    // 64/255 / (128/255) = 0.5 -> 128
    assert_eq!(out[0], 128);
}
