//! Scene configuration for the terrain-steps wallpaper.
//!
//! JSON schema covering the host-exposed properties: simulation pacing,
//! contour stepping, and stroke styling. Defaults reproduce the stock
//! wallpaper look.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a scene configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// Root configuration object passed to every pipeline component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub simulation: SimulationSettings,

    #[serde(default)]
    pub contour: ContourSettings,

    #[serde(default)]
    pub style: StrokeStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationSettings::default(),
            contour: ContourSettings::default(),
            style: StrokeStyle::default(),
        }
    }
}

impl SceneConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.style.validate()?;
        Ok(())
    }
}

/// Pacing and field-shape settings for the probe simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Frames per second the host drives the loop at.
    #[serde(default = "default_fps")]
    pub fps: f64,

    /// Depth drift speed multiplier (per second).
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Maximum probe depth; thresholds span `(0, max_depth]`.
    #[serde(default = "default_max_depth")]
    pub max_depth: f64,

    /// Grid spacing in pixels between adjacent probe centres.
    #[serde(default = "default_spacing")]
    pub spacing: f64,

    /// Per-frame impulse damping factor in `[0, 1)`.
    #[serde(default = "default_slow_down")]
    pub slow_down: f64,

    /// Strength of pointer-drag kicks.
    #[serde(default = "default_drag_intensity")]
    pub drag_intensity: f64,

    /// Pointer influence radius in pixels.
    #[serde(default = "default_drag_radius")]
    pub drag_radius: f64,
}

fn default_fps() -> f64 {
    60.0
}

fn default_speed() -> f64 {
    10.0
}

fn default_max_depth() -> f64 {
    150.0
}

fn default_spacing() -> f64 {
    64.0
}

fn default_slow_down() -> f64 {
    0.5
}

fn default_drag_intensity() -> f64 {
    0.7
}

fn default_drag_radius() -> f64 {
    150.0
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            speed: default_speed(),
            max_depth: default_max_depth(),
            spacing: default_spacing(),
            slow_down: default_slow_down(),
            drag_intensity: default_drag_intensity(),
            drag_radius: default_drag_radius(),
        }
    }
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ConfigError::Validation("fps must be > 0".to_string()));
        }
        if !(self.max_depth.is_finite() && self.max_depth > 0.0) {
            return Err(ConfigError::Validation(
                "max_depth must be > 0".to_string(),
            ));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(ConfigError::Validation("spacing must be > 0".to_string()));
        }
        if !(self.slow_down >= 0.0 && self.slow_down < 1.0) {
            return Err(ConfigError::Validation(
                "slow_down must be in [0, 1)".to_string(),
            ));
        }
        if !(self.drag_radius.is_finite() && self.drag_radius >= 0.0) {
            return Err(ConfigError::Validation(
                "drag_radius must be >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contour extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContourSettings {
    /// Number of iso-depth threshold levels. Zero yields no contours.
    #[serde(default = "default_step_count")]
    pub step_count: usize,

    /// Corner-cutting smoothing passes. Zero disables smoothing.
    #[serde(default = "default_rounding_passes")]
    pub rounding_passes: u32,
}

fn default_step_count() -> usize {
    8
}

fn default_rounding_passes() -> u32 {
    2
}

impl Default for ContourSettings {
    fn default() -> Self {
        Self {
            step_count: default_step_count(),
            rounding_passes: default_rounding_passes(),
        }
    }
}

/// Stroke styling for rendered frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Background fill colour.
    #[serde(default = "default_colour")]
    pub colour: Color,

    /// Contour line colour.
    #[serde(default = "default_border_colour")]
    pub border_colour: Color,

    /// Contour line width in pixels.
    #[serde(default = "default_border_thickness")]
    pub border_thickness: f64,
}

fn default_colour() -> Color {
    Color::rgb(255, 155, 249)
}

fn default_border_colour() -> Color {
    Color::rgb(20, 0, 15)
}

fn default_border_thickness() -> f64 {
    2.0
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            colour: default_colour(),
            border_colour: default_border_colour(),
            border_thickness: default_border_thickness(),
        }
    }
}

impl StrokeStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.border_thickness.is_finite() && self.border_thickness > 0.0) {
            return Err(ConfigError::Validation(
                "border_thickness must be > 0".to_string(),
            ));
        }
        if !self.colour.is_well_formed() {
            return Err(ConfigError::Validation("colour is malformed".to_string()));
        }
        if !self.border_colour.is_well_formed() {
            return Err(ConfigError::Validation(
                "border_colour is malformed".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_stock_wallpaper() {
        let config = SceneConfig::default();
        assert_eq!(config.simulation.fps, 60.0);
        assert_eq!(config.simulation.speed, 10.0);
        assert_eq!(config.simulation.max_depth, 150.0);
        assert_eq!(config.simulation.spacing, 64.0);
        assert_eq!(config.simulation.slow_down, 0.5);
        assert_eq!(config.contour.step_count, 8);
        assert_eq!(config.contour.rounding_passes, 2);
        assert_eq!(config.style.colour.to_rgba(), (255, 155, 249, 255));
        assert_eq!(config.style.border_colour.to_rgba(), (20, 0, 15, 255));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SceneConfig::from_json(
            r#"{
                "contour": { "step_count": 12 },
                "style": { "border_colour": "20, 0, 15" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.contour.step_count, 12);
        assert_eq!(config.contour.rounding_passes, 2);
        assert_eq!(config.simulation.spacing, 64.0);
        assert_eq!(config.style.border_colour.to_rgba(), (20, 0, 15, 255));
    }

    #[test]
    fn test_validation_rejects_bad_settings() {
        let mut config = SceneConfig::default();
        config.simulation.fps = 0.0;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.simulation.slow_down = 1.0;
        assert!(config.validate().is_err());

        let mut config = SceneConfig::default();
        config.style.border_thickness = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_step_count_is_allowed() {
        let config = SceneConfig::from_json(r#"{ "contour": { "step_count": 0 } }"#).unwrap();
        assert_eq!(config.contour.step_count, 0);
        assert!(config.validate().is_ok());
    }
}
