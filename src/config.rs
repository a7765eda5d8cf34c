//! Scene configuration: the design constants that shape view, hit-testing, and geometry.
//!
//! Every field has a default from [`crate::consts`]. Hosts may override any
//! subset by passing a JSON object to [`SceneConfig::from_json`]; missing
//! keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    CAMERA_BODY_RADIUS, CLICK_TOLERANCE_PX, DEFAULT_RECT_SIZE, MAX_ZOOM, MIN_RECT_SIZE, MIN_ZOOM,
    MINOR_GRID_ZOOM_THRESHOLD, REFERENCE_WORLD_HEIGHT, REFERENCE_WORLD_WIDTH, WHEEL_ZOOM_SENSITIVITY,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// World width spanning the canvas at zoom 1.
    pub reference_world_width: f64,
    /// World height spanning the canvas at zoom 1.
    pub reference_world_height: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub wheel_sensitivity: f64,
    /// Click slop in canvas pixels.
    pub click_tolerance_px: f64,
    /// Camera body radius in world units.
    pub camera_body_radius: f64,
    pub minor_grid_zoom_threshold: f64,
    /// Floor for rectangle width/height in world units.
    pub min_rect_size: f64,
    pub default_rect_size: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            reference_world_width: REFERENCE_WORLD_WIDTH,
            reference_world_height: REFERENCE_WORLD_HEIGHT,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_sensitivity: WHEEL_ZOOM_SENSITIVITY,
            click_tolerance_px: CLICK_TOLERANCE_PX,
            camera_body_radius: CAMERA_BODY_RADIUS,
            minor_grid_zoom_threshold: MINOR_GRID_ZOOM_THRESHOLD,
            min_rect_size: MIN_RECT_SIZE,
            default_rect_size: DEFAULT_RECT_SIZE,
        }
    }
}

impl SceneConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON and `Invalid` for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("reference_world_width", self.reference_world_width),
            ("reference_world_height", self.reference_world_height),
            ("min_zoom", self.min_zoom),
            ("click_tolerance_px", self.click_tolerance_px),
            ("camera_body_radius", self.camera_body_radius),
            ("min_rect_size", self.min_rect_size),
            ("default_rect_size", self.default_rect_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                tracing::warn!(%name, %value, "rejecting scene config");
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.max_zoom.is_finite() && self.min_zoom <= self.max_zoom) {
            return Err(ConfigError::Invalid(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !self.wheel_sensitivity.is_finite() || !self.minor_grid_zoom_threshold.is_finite() {
            return Err(ConfigError::Invalid("wheel_sensitivity and minor_grid_zoom_threshold must be finite".into()));
        }
        if self.default_rect_size < self.min_rect_size {
            return Err(ConfigError::Invalid(format!(
                "default_rect_size {} is below min_rect_size {}",
                self.default_rect_size, self.min_rect_size
            )));
        }
        Ok(())
    }
}
