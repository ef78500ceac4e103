//! Settings and preferences
//!
//! Loaded from an optional JSON file; every field has a default so a file
//! only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GridMap, PlayerState, RenderConfig, BUILTIN_SOLID};
use crate::error::SettingsError;
use crate::frame_loop::World;
use crate::types::{
    DEFAULT_FOV, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_PLAYER_SPEED, DEFAULT_RENDER_DISTANCE,
    DEFAULT_SPAWN,
};

/// Key-release fallback for terminals that never report releases.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 200;

/// Pointer units per terminal cell of mouse motion.
pub const DEFAULT_POINTER_CELL_SCALE: f32 = 30.0;

/// Pointer units per arrow-key turn event.
pub const DEFAULT_KEY_TURN_RATE: f32 = 40.0;

/// An authored map: ASCII rows plus the symbols that block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    pub rows: Vec<String>,
    pub solid: String,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Camera ===
    /// Horizontal field of view in degrees
    pub fov_degrees: f32,
    /// Max ray length in tiles
    pub render_distance: f32,
    /// Pointer delta to turn-rate scale
    pub mouse_sensitivity: f32,

    // === Player ===
    /// Tiles per second
    pub player_speed: f32,
    pub spawn: [f32; 2],
    /// Facing at spawn, degrees (0 faces +y)
    pub spawn_angle_degrees: f32,

    // === Frame ===
    /// Optional frame-rate cap
    pub max_fps: Option<u32>,
    /// FPS overlay in the top-left corner
    pub show_fps: bool,

    // === Terminal input ===
    pub key_release_timeout_ms: u32,
    pub pointer_cell_scale: f32,
    pub key_turn_rate: f32,

    /// Custom level; the built-in map when absent
    pub map: Option<MapSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV.to_degrees(),
            render_distance: DEFAULT_RENDER_DISTANCE,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,

            player_speed: DEFAULT_PLAYER_SPEED,
            spawn: [DEFAULT_SPAWN.0, DEFAULT_SPAWN.1],
            spawn_angle_degrees: 0.0,

            max_fps: None,
            show_fps: true,

            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            pointer_cell_scale: DEFAULT_POINTER_CELL_SCALE,
            key_turn_rate: DEFAULT_KEY_TURN_RATE,

            map: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        RenderConfig::new(
            self.fov_degrees.to_radians(),
            self.render_distance,
            self.mouse_sensitivity,
        )
    }

    pub fn build_map(&self) -> Result<GridMap, ConfigError> {
        match &self.map {
            Some(m) => GridMap::from_rows(m.rows.as_slice(), m.solid.as_bytes()),
            None => Ok(GridMap::builtin()),
        }
    }

    /// Validate everything and assemble the world the frame loop owns.
    pub fn build_world(&self) -> Result<World, ConfigError> {
        let config = self.render_config()?;
        let map = self.build_map()?;
        let player = PlayerState::spawn(
            &map,
            self.spawn[0],
            self.spawn[1],
            self.spawn_angle_degrees.to_radians(),
            self.player_speed,
        )?;
        Ok(World {
            map,
            player,
            config,
        })
    }

    /// Minimum frame time implied by `max_fps`.
    pub fn frame_cap_ms(&self) -> Option<u64> {
        self.max_fps
            .filter(|&fps| fps > 0)
            .map(|fps| (1000 / fps as u64).max(1))
    }

    /// Settings file with the built-in level spelled out, as a starting point.
    pub fn example_json() -> String {
        let settings = Settings {
            map: Some(MapSettings {
                rows: GridMap::builtin_rows().iter().map(|r| r.to_string()).collect(),
                solid: String::from_utf8_lossy(&BUILTIN_SOLID).into_owned(),
            }),
            ..Settings::default()
        };
        serde_json::to_string_pretty(&settings).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn default_world_uses_builtin_map_and_spawn() {
        let world = Settings::default().build_world().unwrap();
        assert_eq!(world.map, GridMap::builtin());
        assert_eq!(world.player.position(), (10.0, 10.0));
        assert_eq!(world.player.angle, 0.0);
    }

    #[test]
    fn example_json_round_trips_to_the_same_world() {
        let s = Settings::from_json(&Settings::example_json()).unwrap();
        let world = s.build_world().unwrap();
        assert_eq!(world.map, GridMap::builtin());
    }

    #[test]
    fn frame_cap_ignores_zero() {
        let mut s = Settings::default();
        assert_eq!(s.frame_cap_ms(), None);
        s.max_fps = Some(0);
        assert_eq!(s.frame_cap_ms(), None);
        s.max_fps = Some(30);
        assert_eq!(s.frame_cap_ms(), Some(33));
    }
}
