//! Render configuration, fixed at startup.

use crate::error::{ConfigError, Result};
use crate::types::{DEFAULT_FOV, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_RENDER_DISTANCE};

/// Camera and turning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    fov: f32,
    render_distance: f32,
    mouse_sensitivity: f32,
}

impl RenderConfig {
    /// Validate and build a config.
    ///
    /// `fov` is radians in `(0, pi)`, `render_distance` is tiles.
    pub fn new(fov: f32, render_distance: f32, mouse_sensitivity: f32) -> Result<Self> {
        if !fov.is_finite() || fov <= 0.0 || fov >= std::f32::consts::PI {
            return Err(ConfigError::InvalidFov(fov));
        }
        if !render_distance.is_finite() || render_distance <= 0.0 {
            return Err(ConfigError::InvalidRenderDistance(render_distance));
        }
        if !mouse_sensitivity.is_finite() {
            return Err(ConfigError::InvalidSensitivity(mouse_sensitivity));
        }
        Ok(Self {
            fov,
            render_distance,
            mouse_sensitivity,
        })
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn render_distance(&self) -> f32 {
        self.render_distance
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            render_distance: DEFAULT_RENDER_DISTANCE,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}
