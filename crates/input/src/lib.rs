//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into the core key set and [`InputEvent`]s, and tracks
//! held keys in a way that works on terminals without key-release events.
//!
//! [`InputEvent`]: crate::types::InputEvent

pub mod handler;
pub mod map;
pub mod source;

pub use tui_raycaster_engine as engine;
pub use tui_raycaster_types as types;

pub use handler::KeyTracker;
pub use map::{is_interrupt, map_key, Binding};
pub use source::{InputConfig, TerminalInput};
