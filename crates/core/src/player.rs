//! Player state: continuous position, facing angle, and speed.

use crate::error::{ConfigError, Result};
use crate::grid_map::GridMap;
use crate::types::{DEFAULT_PLAYER_SPEED, DEFAULT_SPAWN};

/// The viewer.
///
/// `position` is in tile units; `angle` is radians with `0` facing `+y`.
/// Movement never commits a position whose containing tile is solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    /// Tiles per second.
    pub speed: f32,
}

impl PlayerState {
    pub fn new(x: f32, y: f32, angle: f32, speed: f32) -> Self {
        Self { x, y, angle, speed }
    }

    /// Place a player on `map`, rejecting spawns outside the grid or inside walls.
    pub fn spawn(map: &GridMap, x: f32, y: f32, angle: f32, speed: f32) -> Result<Self> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        if !map.contains(x, y) {
            return Err(ConfigError::SpawnOutOfBounds { x, y });
        }
        match map.tile_at_point(x, y) {
            Some(symbol) if map.is_solid(symbol) => {
                Err(ConfigError::SpawnInsideWall { x, y, symbol })
            }
            Some(_) => Ok(Self::new(x, y, angle, speed)),
            None => Err(ConfigError::SpawnOutOfBounds { x, y }),
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Unit view direction `(sin(angle), cos(angle))`.
    #[inline]
    pub fn eye(&self) -> (f32, f32) {
        self.angle.sin_cos()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN.0, DEFAULT_SPAWN.1, 0.0, DEFAULT_PLAYER_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> GridMap {
        GridMap::from_rows(&["###", "#.#", "###"], b"#").unwrap()
    }

    #[test]
    fn spawn_in_open_tile_succeeds() {
        let p = PlayerState::spawn(&room(), 1.5, 1.5, 0.0, 1.0).unwrap();
        assert_eq!(p.position(), (1.5, 1.5));
    }

    #[test]
    fn spawn_inside_wall_is_rejected() {
        let err = PlayerState::spawn(&room(), 0.5, 1.5, 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SpawnInsideWall {
                x: 0.5,
                y: 1.5,
                symbol: b'#'
            }
        );
    }

    #[test]
    fn spawn_outside_grid_is_rejected() {
        assert!(matches!(
            PlayerState::spawn(&room(), -1.0, 1.0, 0.0, 1.0),
            Err(ConfigError::SpawnOutOfBounds { .. })
        ));
    }

    #[test]
    fn eye_faces_positive_y_at_angle_zero() {
        let p = PlayerState::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(p.eye(), (0.0, 1.0));
    }
}
