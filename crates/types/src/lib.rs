//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core casting logic, terminal presentation, input mapping).
//!
//! # Units
//!
//! - Positions are in map-tile units: one unit is one tile, fractions are allowed.
//! - Angles are radians. Angle `0` faces `+y`; the view direction is
//!   `(sin(angle), cos(angle))`.
//! - Colors are packed `0xAARRGGBB` values with an opaque alpha channel.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FOV` | π/2.5 | Horizontal field of view (72°) |
//! | `DEFAULT_RENDER_DISTANCE` | 16 | Max ray length in tiles |
//! | `DEFAULT_MOUSE_SENSITIVITY` | 0.1 | Pointer delta → radians scale |
//! | `DEFAULT_PLAYER_SPEED` | 3 | Tiles per second |
//! | `DEFAULT_SPAWN` | (10, 10) | Start position |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{HeldKeys, Key, Rgb};
//!
//! let mut keys = HeldKeys::default();
//! keys.set(Key::Forward, true);
//! assert!(keys.forward);
//! assert!(keys.any_movement());
//!
//! let white = Rgb::new(255, 255, 255);
//! assert_eq!(white.pack(), 0xFFFF_FFFF);
//! assert_eq!(Rgb::unpack(0xFF10_2030), Rgb::new(0x10, 0x20, 0x30));
//! ```

/// A tile symbol as authored in an ASCII map.
pub type Symbol = u8;

/// Walkable floor tile. Never part of a solid set.
pub const EMPTY_TILE: Symbol = b'.';

/// Default wall tile.
pub const WALL_TILE: Symbol = b'#';

/// Brick wall material.
pub const BRICK_TILE: Symbol = b'B';

/// Slate wall material.
pub const SLATE_TILE: Symbol = b'S';

/// Horizontal field of view in radians (π/2.5, 72°).
pub const DEFAULT_FOV: f32 = std::f32::consts::PI / 2.5;

/// Maximum ray length in tiles.
pub const DEFAULT_RENDER_DISTANCE: f32 = 16.0;

/// Pointer motion to turn-rate scale.
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;

/// Player speed in tiles per second.
pub const DEFAULT_PLAYER_SPEED: f32 = 3.0;

/// Spawn position on the built-in map.
pub const DEFAULT_SPAWN: (f32, f32) = (10.0, 10.0);

/// Window/terminal title prefix; the FPS value is appended.
pub const WINDOW_TITLE: &str = "Software Rendering";

/// Window over which frames are counted for the FPS readout.
pub const FPS_WINDOW_MS: u64 = 1000;

/// Opaque alpha channel for packed colors.
pub const ALPHA_OPAQUE: u32 = 0xFF00_0000;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform grey.
    pub const fn grey(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Pack into `0xAARRGGBB` with an opaque alpha channel.
    #[inline(always)]
    pub const fn pack(self) -> u32 {
        ALPHA_OPAQUE | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack a `0xAARRGGBB` value, ignoring alpha.
    #[inline(always)]
    pub const fn unpack(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }

    /// Scale every channel by `factor` (clamped to `0.0..=1.0`).
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        let f = if factor.is_finite() {
            factor.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            r: (self.r as f32 * f) as u8,
            g: (self.g as f32 * f) as u8,
            b: (self.b as f32 * f) as u8,
        }
    }
}

/// The fixed key set the core cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move along the view direction (W)
    Forward,
    /// Move against the view direction (S)
    Backward,
    /// Sidestep left (A)
    StrafeLeft,
    /// Sidestep right (D)
    StrafeRight,
    /// Leave the frame loop (Esc)
    Quit,
}

impl Key {
    /// Movement keys in input scan order. Movement resolves them in this order.
    pub const MOVEMENT: [Key; 4] = [Key::Forward, Key::Backward, Key::StrafeLeft, Key::StrafeRight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Forward => "forward",
            Key::Backward => "backward",
            Key::StrafeLeft => "strafeLeft",
            Key::StrafeRight => "strafeRight",
            Key::Quit => "quit",
        }
    }
}

/// Snapshot of held-key state, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub quit: bool,
}

impl HeldKeys {
    pub fn is_down(&self, key: Key) -> bool {
        match key {
            Key::Forward => self.forward,
            Key::Backward => self.backward,
            Key::StrafeLeft => self.strafe_left,
            Key::StrafeRight => self.strafe_right,
            Key::Quit => self.quit,
        }
    }

    pub fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Forward => self.forward = down,
            Key::Backward => self.backward = down,
            Key::StrafeLeft => self.strafe_left = down,
            Key::StrafeRight => self.strafe_right = down,
            Key::Quit => self.quit = down,
        }
    }

    pub fn any_movement(&self) -> bool {
        self.forward || self.backward || self.strafe_left || self.strafe_right
    }
}

/// Events drained from the input source once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The user (or the terminal) asked to exit.
    Quit,
    /// Relative pointer motion since the previous event.
    PointerMotion { dx: f32, dy: f32 },
    /// Output surface changed size (terminal columns, rows).
    Resize { cols: u16, rows: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_and_spawn_constants() {
        assert!((DEFAULT_FOV.to_degrees() - 72.0).abs() < 1e-3);
        assert_eq!(DEFAULT_RENDER_DISTANCE, 16.0);
        assert_eq!(DEFAULT_MOUSE_SENSITIVITY, 0.1);
        assert_eq!(DEFAULT_PLAYER_SPEED, 3.0);
        assert_eq!(DEFAULT_SPAWN, (10.0, 10.0));
    }

    #[test]
    fn rgb_pack_is_opaque_argb() {
        assert_eq!(Rgb::new(0x12, 0x34, 0x56).pack(), 0xFF12_3456);
        assert_eq!(Rgb::default().pack(), ALPHA_OPAQUE);
    }

    #[test]
    fn rgb_scaled_clamps_and_rejects_non_finite() {
        let c = Rgb::new(200, 100, 50);
        assert_eq!(c.scaled(0.5), Rgb::new(100, 50, 25));
        assert_eq!(c.scaled(2.0), c);
        assert_eq!(c.scaled(f32::NAN), Rgb::default());
    }

    #[test]
    fn held_keys_set_and_query() {
        let mut keys = HeldKeys::default();
        assert!(!keys.any_movement());
        for key in Key::MOVEMENT {
            keys.set(key, true);
            assert!(keys.is_down(key));
        }
        keys.set(Key::Quit, true);
        assert!(keys.quit);
    }
}
