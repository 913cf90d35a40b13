//! Error types for frame rendering.

use thiserror::Error;

/// Errors that can occur while rendering or encoding a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The canvas dimensions are unusable.
    #[error("cannot create {width}x{height} canvas")]
    CanvasCreation { width: u32, height: u32 },

    /// The pixel buffer does not match the stated dimensions.
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    BufferMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
