//! Iso-depth contour ("step") extraction for the animated terrain field.
//!
//! Per-frame pipeline over a read-only probe grid:
//! - fixed descending threshold levels
//! - threshold crossings along 4-connected grid edges
//! - one step graph per level, with orientation-aware adjacency
//!   reconstruction
//! - Chaikin corner-cut smoothing of the resulting polylines

pub mod crossing;
pub mod error;
pub mod extract;
pub mod graph;
pub mod levels;
pub mod smooth;

pub use crossing::{crossings_between, Crossing};
pub use error::{ContourError, ContourResult};
pub use extract::ContourExtractor;
pub use graph::{EdgeId, Orientation, StepEdge, StepGraph, StepVertex, VertexId};
pub use levels::LevelSet;
