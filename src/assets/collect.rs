use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{SlideError, SlideResult};

/// File extensions (lowercase, without the dot) accepted as input frames.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Return `true` when `path` has one of [`SUPPORTED_EXTENSIONS`], compared case-insensitively.
pub fn is_supported_image(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.contains(&ext.as_str())
}

/// List the image files of `dir`, sorted by file name.
///
/// Only regular files (or symlinks to them) with a supported extension are returned; the
/// directory is not searched recursively. An empty result is reported as
/// [`SlideError::InputEmpty`] so callers never build an empty animation.
pub fn collect_inputs(dir: impl AsRef<Path>) -> SlideResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let rd = std::fs::read_dir(dir)
        .with_context(|| format!("read input directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in rd {
        let entry =
            entry.with_context(|| format!("read entry of input directory '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() || !is_supported_image(&path) {
            continue;
        }
        files.push((entry.file_name(), path));
    }

    if files.is_empty() {
        return Err(SlideError::InputEmpty(dir.to_path_buf()));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files.into_iter().map(|(_, p)| p).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/collect.rs"]
mod tests;
