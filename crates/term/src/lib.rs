//! Terminal presentation module.
//!
//! The core renders into a plain pixel buffer; this crate turns that buffer
//! into terminal cells and flushes them. It intentionally avoids ratatui
//! widgets/layout and instead renders into a simple framebuffer that can be
//! flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Two pixels per cell using upper half blocks, which also evens out the
//!   tall aspect ratio of terminal glyphs
//! - Diff-based output so static parts of the view cost nothing

pub mod display;
pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_types as types;

pub use display::TerminalDisplay;
pub use fb::{Cell, FrameBuffer, Rgb, HALF_BLOCK};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{HalfBlockView, Viewport};
