//! Seams between the frame loop and the outside world.
//!
//! The loop only ever talks to a display surface, an input source and a
//! clock through these traits, so it runs unchanged against a terminal or
//! against in-memory fakes in tests.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::PixelBuffer;
use crate::types::{HeldKeys, InputEvent, Key};

/// Accepts one fully populated frame at a time.
pub trait Display {
    /// Present a finished frame.
    fn present(&mut self, frame: &PixelBuffer) -> Result<()>;

    /// Current surface size in pixels `(width, height)`.
    fn pixel_size(&self) -> (usize, usize);

    /// The surface changed size (terminal cells).
    fn resize(&mut self, _cols: u16, _rows: u16) -> Result<()> {
        Ok(())
    }

    /// New frames-per-second reading, once per counting window.
    fn set_fps(&mut self, _fps: u32) -> Result<()> {
        Ok(())
    }
}

/// Event queue plus held-key state.
pub trait InputSource {
    /// Next pending event, or `None` once the queue is drained for this frame.
    fn poll_event(&mut self) -> Result<Option<InputEvent>>;

    fn is_key_down(&self, key: Key) -> bool;

    /// Snapshot of every key the core cares about.
    fn held_keys(&self) -> HeldKeys {
        HeldKeys {
            forward: self.is_key_down(Key::Forward),
            backward: self.is_key_down(Key::Backward),
            strafe_left: self.is_key_down(Key::StrafeLeft),
            strafe_right: self.is_key_down(Key::StrafeRight),
            quit: self.is_key_down(Key::Quit),
        }
    }
}

/// Millisecond time source.
pub trait Clock {
    fn now_millis(&self) -> u64;

    /// Block for `ms`; only used by the optional frame-rate cap.
    fn sleep_ms(&self, ms: u64);
}

/// Monotonic clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}
