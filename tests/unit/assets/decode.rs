use std::path::PathBuf;

use super::*;

fn png_bytes(img: &image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_straight_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100, 50, 200, 128]).unwrap();
    let frame = decode_image(&png_bytes(&img), None).unwrap();
    assert_eq!(frame.size(), (1, 1));
    assert_eq!(frame.data, vec![100, 50, 200, 128]);
}

#[test]
fn decode_rgb_source_gets_opaque_alpha() {
    let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([10, 20, 30]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Bmp)
        .unwrap();

    let frame = decode_image(&buf, None).unwrap();
    assert_eq!(frame.pixel(1, 1), Some([10, 20, 30, 255]));
}

#[test]
fn decode_garbage_is_an_error() {
    assert!(decode_image(b"definitely not an image", None).is_err());
    assert!(decode_image(b"definitely not an image", Some(image::ImageFormat::Png)).is_err());
}

#[test]
fn content_wins_over_a_wrong_hint() {
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([9, 8, 7, 255]));
    let frame = decode_image(&png_bytes(&img), Some(image::ImageFormat::Bmp)).unwrap();
    assert_eq!(frame.size(), (3, 2));
    assert_eq!(frame.pixel(2, 1), Some([9, 8, 7, 255]));
}

#[test]
fn load_frame_sniffs_content_behind_a_misleading_extension() {
    let dir = PathBuf::from("target").join("unit_decode");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("actually_png.jpg");
    image::RgbaImage::from_pixel(5, 3, image::Rgba([4, 5, 6, 255]))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();

    let frame = load_frame(&path, None).unwrap();
    assert_eq!(frame.pixel(4, 2), Some([4, 5, 6, 255]));
}

#[test]
fn resize_stretches_to_exact_size() {
    let frame = FrameRGBA::filled(10, 4, [7, 7, 7, 255]);
    let out = resize_frame(frame, ResizeSpec::new(3, 9).unwrap()).unwrap();
    assert_eq!(out.size(), (3, 9));
    assert_eq!(out.pixel(1, 4), Some([7, 7, 7, 255]));
}

#[test]
fn load_frame_applies_resize() {
    let dir = PathBuf::from("target").join("unit_decode");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("src.png");
    image::RgbaImage::from_pixel(8, 8, image::Rgba([1, 2, 3, 255]))
        .save(&path)
        .unwrap();

    let plain = load_frame(&path, None).unwrap();
    assert_eq!(plain.size(), (8, 8));

    let resized = load_frame(&path, Some(ResizeSpec::new(4, 2).unwrap())).unwrap();
    assert_eq!(resized.size(), (4, 2));
}

#[test]
fn load_frame_reports_missing_file() {
    let err = load_frame(Path::new("target/unit_decode/missing.png"), None).unwrap_err();
    assert!(err.to_string().contains("missing.png"));
}
