//! Frame rendering for the terrain-steps wallpaper.
//!
//! Strokes the extracted step edges onto an RGBA canvas and encodes
//! frames as PNG. Includes the debug overlays for probes and raw step
//! vertices.

pub mod canvas;
pub mod error;
pub mod png;

pub use canvas::FrameRenderer;
pub use error::{RenderError, RenderResult};
