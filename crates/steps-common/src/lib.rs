//! Common types shared across the terrain-steps crates.

pub mod color;
pub mod config;
pub mod geom;
pub mod grid;
pub mod probe;

pub use color::Color;
pub use config::{ConfigError, ContourSettings, SceneConfig, SimulationSettings, StrokeStyle};
pub use geom::Point2;
pub use grid::SampleGrid;
pub use probe::Probe;
