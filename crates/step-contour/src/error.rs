//! Error types for contour extraction.

use thiserror::Error;

/// Errors that can occur while building step graphs.
#[derive(Debug, Error)]
pub enum ContourError {
    /// A vertex was constructed from non-finite coordinates.
    #[error("vertex coordinates must be finite: base=({base_x}, {base_y}) pos=({x}, {y})")]
    NonFiniteCoordinate {
        base_x: f64,
        base_y: f64,
        x: f64,
        y: f64,
    },

    /// An edge endpoint does not reference a vertex of the graph.
    #[error("edge endpoint {id} is not a vertex of this graph ({len} vertices)")]
    InvalidVertexRef { id: usize, len: usize },

    /// A level set failed validation.
    #[error("invalid level set: {0}")]
    InvalidLevels(String),
}

/// Result type for contour operations.
pub type ContourResult<T> = std::result::Result<T, ContourError>;
