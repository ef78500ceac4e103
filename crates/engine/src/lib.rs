//! Frame loop and application wiring.
//!
//! Owns the world (map, player, render config) and runs it through three
//! collaborators: a [`Display`] that presents pixel buffers, an
//! [`InputSource`] that yields events and held keys, and a [`Clock`]. The
//! terminal implementations live in `tui-raycaster-term` and
//! `tui-raycaster-input`; tests drive the loop with in-memory fakes.

pub mod collaborators;
pub mod error;
pub mod fps;
pub mod frame_loop;
pub mod settings;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use collaborators::{Clock, Display, InputSource, SystemClock};
pub use error::{SettingsError, StartupError};
pub use fps::FpsCounter;
pub use frame_loop::{FrameLoop, LoopState, RunSummary, World};
pub use settings::{MapSettings, Settings};
