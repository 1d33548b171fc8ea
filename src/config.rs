//! Per-viewport options.
//!
//! Hosts pass these as a JSON object with camelCase keys; every key is
//! optional and falls back to the defaults in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZOOM_FLOOR, DEFAULT_ZOOM_STEP};
use crate::error::ViewportError;

/// Tunables for a single viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    /// Zoom steps landing at or below this value are rejected.
    pub zoom_floor: f64,
    /// Zoom change applied per wheel tick.
    pub zoom_step: f64,
    /// Report the pointer position on every move, not just zoom changes.
    pub show_axis_readout: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { zoom_floor: DEFAULT_ZOOM_FLOOR, zoom_step: DEFAULT_ZOOM_STEP, show_axis_readout: true }
    }
}

impl ViewportConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::Json`] for malformed JSON and
    /// [`ViewportError::InvalidConfig`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ViewportError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Check value ranges, returning the config unchanged when valid.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidConfig`] if the floor or the step is
    /// not a positive finite number.
    pub fn validate(self) -> Result<Self, ViewportError> {
        if !self.zoom_floor.is_finite() || self.zoom_floor <= 0.0 {
            return Err(ViewportError::InvalidConfig(format!(
                "zoomFloor must be a finite, positive number (got {})",
                self.zoom_floor
            )));
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(ViewportError::InvalidConfig(format!(
                "zoomStep must be a finite, positive number (got {})",
                self.zoom_step
            )));
        }
        Ok(self)
    }
}
