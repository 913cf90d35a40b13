//! The animated probe-field simulation feeding the contour pipeline.
//!
//! Owns the probe grid and advances it frame by frame: steady depth
//! drift, decaying pointer-induced impulses, and boundary bounces. The
//! contour engine only ever sees the grid through a read-only view.

pub mod field;
pub mod pointer;

pub use field::ProbeField;
pub use pointer::PointerDrag;
