use std::path::PathBuf;

/// Result alias used across the crate.
pub type SlideResult<T> = Result<T, SlideError>;

/// Errors produced while collecting, building, or encoding a frame sequence.
///
/// A missing font is not an error: it is reported as
/// [`crate::FontResolution::Fallback`] and rendering continues.
#[derive(thiserror::Error, Debug)]
pub enum SlideError {
    /// The input directory contained no file with a supported image extension.
    #[error("no valid image files found in '{}'", .0.display())]
    InputEmpty(PathBuf),

    /// A user-supplied option could not be parsed or is out of range.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Internal consistency check failed (mismatched sizes, bad buffers).
    #[error("validation error: {0}")]
    Validation(String),

    /// Writing the animated output failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Any other failure (I/O, decoding) with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideError {
    /// Build an [`SlideError::Argument`].
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    /// Build an [`SlideError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`SlideError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

impl From<gif::EncodingError> for SlideError {
    fn from(e: gif::EncodingError) -> Self {
        Self::Encode(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
