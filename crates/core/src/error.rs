//! Startup configuration errors.
//!
//! Everything here is fatal before the first frame. Nothing in the per-frame
//! path returns these; out-of-bounds lookups and blocked moves are ordinary
//! outcomes, not errors.

use thiserror::Error;

use crate::types::Symbol;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("map dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("map is {width}x{height} but has {actual} tiles (expected {expected})")]
    TileCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("map row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("solid symbol set is empty; rays and movement would never be blocked")]
    NoSolidSymbols,

    #[error("empty tile symbol {:?} cannot be solid", *.0 as char)]
    EmptySymbolSolid(Symbol),

    #[error("field of view must be within (0, pi) radians (got {0})")]
    InvalidFov(f32),

    #[error("render distance must be finite and positive (got {0})")]
    InvalidRenderDistance(f32),

    #[error("mouse sensitivity must be finite (got {0})")]
    InvalidSensitivity(f32),

    #[error("player speed must be finite and non-negative (got {0})")]
    InvalidSpeed(f32),

    #[error("spawn ({x}, {y}) is outside the map")]
    SpawnOutOfBounds { x: f32, y: f32 },

    #[error("spawn ({x}, {y}) is inside solid tile {:?}", *.symbol as char)]
    SpawnInsideWall { x: f32, y: f32, symbol: Symbol },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
