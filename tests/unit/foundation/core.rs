use super::*;

#[test]
fn resize_parses_width_and_height() {
    let r: ResizeSpec = "400x300".parse().unwrap();
    assert_eq!((r.width, r.height), (400, 300));

    let upper: ResizeSpec = "640X480".parse().unwrap();
    assert_eq!((upper.width, upper.height), (640, 480));
}

#[test]
fn resize_rejects_malformed_input() {
    for bad in ["abcxyz", "400-300", "400", "400x", "x300", "400x300x2", "-4x3", "4.5x3", ""] {
        let err = bad.parse::<ResizeSpec>().unwrap_err();
        assert!(
            matches!(err, SlideError::Argument(_)),
            "'{bad}' should be an argument error, got {err}"
        );
    }
}

#[test]
fn resize_rejects_zero_dimensions() {
    assert!("0x300".parse::<ResizeSpec>().is_err());
    assert!("400x0".parse::<ResizeSpec>().is_err());
}

#[test]
fn resize_serializes_as_string() {
    let r = ResizeSpec::new(500, 500).unwrap();
    assert_eq!(serde_json::to_string(&r).unwrap(), "\"500x500\"");
    let back: ResizeSpec = serde_json::from_str("\"320x200\"").unwrap();
    assert_eq!(back, ResizeSpec::new(320, 200).unwrap());
    assert!(serde_json::from_str::<ResizeSpec>("\"320-200\"").is_err());
}

#[test]
fn rgb_hex_parse_and_format() {
    let c: Rgb8 = "#FF69B4".parse().unwrap();
    assert_eq!(c, Rgb8([0xFF, 0x69, 0xB4]));
    assert_eq!(c.to_hex(), "#ff69b4");
    assert_eq!("00ffb7".parse::<Rgb8>().unwrap(), Rgb8([0x00, 0xFF, 0xB7]));
    assert!("#FFF".parse::<Rgb8>().is_err());
    assert!("#GG0000".parse::<Rgb8>().is_err());
    assert_eq!(serde_json::to_string(&Rgb8::WHITE).unwrap(), "\"#FFFFFF\"");
}

#[test]
fn frame_new_checks_buffer_length() {
    assert!(FrameRGBA::new(2, 2, vec![0; 16]).is_ok());
    assert!(matches!(
        FrameRGBA::new(2, 2, vec![0; 15]),
        Err(SlideError::Validation(_))
    ));
}

#[test]
fn frame_filled_and_pixel_lookup() {
    let f = FrameRGBA::filled(3, 2, [1, 2, 3, 4]);
    assert_eq!(f.data.len(), 3 * 2 * 4);
    assert_eq!(f.pixel(2, 1), Some([1, 2, 3, 4]));
    assert_eq!(f.pixel(3, 0), None);
    assert_eq!(f.pixel(0, 2), None);
}

#[test]
fn frame_image_conversion_keeps_pixels() {
    let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([9, 8, 7, 255]));
    let frame = FrameRGBA::from_image(img.clone());
    assert_eq!(frame.size(), (4, 3));
    assert_eq!(frame.into_image().unwrap(), img);
}
