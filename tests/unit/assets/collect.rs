use std::path::PathBuf;

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_collect").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"").unwrap();
}

#[test]
fn extension_match_is_case_insensitive() {
    assert!(is_supported_image(Path::new("a.PNG")));
    assert!(is_supported_image(Path::new("dir/b.JpEg")));
    assert!(is_supported_image(Path::new("c.gif")));
    assert!(!is_supported_image(Path::new("d.webp")));
    assert!(!is_supported_image(Path::new("noext")));
    assert!(!is_supported_image(Path::new("png")));
}

#[test]
fn lists_matching_files_sorted_by_name() {
    let dir = scratch_dir("sorted");
    for name in ["c.png", "a.JPG", "b.bmp", "notes.txt", "z.webp"] {
        touch(&dir, name);
    }
    std::fs::create_dir_all(dir.join("sub.png")).unwrap();

    let got = collect_inputs(&dir).unwrap();
    let names: Vec<_> = got
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.JPG", "b.bmp", "c.png"]);
    assert!(got.iter().all(|p| p.starts_with(&dir)));
}

#[test]
fn only_disallowed_extensions_is_input_empty() {
    let dir = scratch_dir("disallowed");
    touch(&dir, "readme.md");
    touch(&dir, "clip.mp4");

    let err = collect_inputs(&dir).unwrap_err();
    assert!(matches!(err, SlideError::InputEmpty(ref d) if d == &dir));
}

#[test]
fn missing_directory_is_an_error() {
    let err = collect_inputs("target/unit_collect/does-not-exist").unwrap_err();
    assert!(matches!(err, SlideError::Other(_)));
}
