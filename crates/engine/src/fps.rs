//! Windowed frame counter.

use crate::types::FPS_WINDOW_MS;

/// Counts frames and reports a reading once per window.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_ms: u64,
    last_output_ms: u64,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new(now_ms: u64) -> Self {
        Self::with_window(now_ms, FPS_WINDOW_MS)
    }

    pub fn with_window(now_ms: u64, window_ms: u64) -> Self {
        Self {
            window_ms,
            last_output_ms: now_ms,
            frames: 0,
            fps: 0,
        }
    }

    /// Count one finished frame at `now_ms`.
    ///
    /// Returns the frame count of the window that just closed, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<u32> {
        self.frames += 1;
        if now_ms.saturating_sub(self.last_output_ms) >= self.window_ms {
            self.last_output_ms = now_ms;
            self.fps = self.frames;
            self.frames = 0;
            return Some(self.fps);
        }
        None
    }

    /// Last published reading.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
