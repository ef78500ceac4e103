//! Core ray-casting module - pure, deterministic, and testable
//!
//! This module contains the world, the player, movement rules, the ray
//! caster and the column renderer. It has **zero dependencies** on terminals,
//! windows, or clocks, making it:
//!
//! - **Deterministic**: Same inputs produce bit-identical frames
//! - **Testable**: Every stage can be driven directly from unit tests
//! - **Portable**: Renders into a plain pixel buffer any display can present
//! - **Fast**: Zero-allocation hot paths for per-frame movement and rendering
//!
//! # Module Structure
//!
//! - [`grid_map`]: Immutable tile grid with a solid-symbol lookup table
//! - [`player`]: Continuous position, facing angle and speed
//! - [`movement`]: Turning plus per-key collision-checked walking
//! - [`caster`]: Grid-line traversal to the nearest solid tile
//! - [`render`]: Per-column wall slice, wall palette and floor gradient
//! - [`pixel_buffer`]: Reusable packed-ARGB render target
//! - [`config`]: Field of view, render distance, mouse sensitivity
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{cast, GridMap};
//!
//! let map = GridMap::from_rows(&["###", "#.#", "###"], b"#").unwrap();
//! let hit = cast((1.5, 1.5), 0.0, &map, 16.0);
//! assert_eq!(hit.tile, Some(b'#'));
//! assert!((hit.distance - 0.5).abs() < 1e-3);
//! ```
//!
//! # Frame
//!
//! A frame is [`apply_movement`] followed by
//! [`ColumnRenderer::render_frame`](render::ColumnRenderer::render_frame) into a
//! [`PixelBuffer`] that was allocated once up front.

pub mod caster;
pub mod config;
pub mod error;
pub mod grid_map;
pub mod movement;
pub mod pixel_buffer;
pub mod player;
pub mod render;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use caster::{cast, cast_dir, RayHit, STEP_EPSILON};
pub use config::RenderConfig;
pub use error::ConfigError;
pub use grid_map::{GridMap, BUILTIN_SOLID};
pub use movement::{apply_movement, MoveInput, MoveOutcome};
pub use pixel_buffer::PixelBuffer;
pub use player::PlayerState;
pub use render::{
    floor_shade, ray_angle, wall_slice, ColumnRenderer, WallPalette, WallSlice, CEILING_COLOR,
    MIN_WALL_DISTANCE,
};
