//! Frame loop - input, movement, rendering, presentation, timing
//!
//! Two states: `Running` and `Terminated`. Each frame, in order:
//!
//! 1. drain every pending input event, summing pointer motion
//! 2. sample held keys
//! 3. move the player
//! 4. render every column into the pixel buffer
//! 5. present the finished buffer
//! 6. update elapsed time and the FPS counter
//!
//! A quit request (quit event or held quit key) never cuts a frame short; it
//! is honoured at the top of the next iteration.

use anyhow::Result;

use crate::collaborators::{Clock, Display, InputSource};
use crate::core::{
    apply_movement, ColumnRenderer, GridMap, MoveInput, PixelBuffer, PlayerState, RenderConfig,
};
use crate::fps::FpsCounter;
use crate::types::{InputEvent, WINDOW_TITLE};

/// Loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Everything the simulation owns.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub map: GridMap,
    pub player: PlayerState,
    pub config: RenderConfig,
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub frames: u64,
    pub last_fps: u32,
}

/// Drives the world through a display, an input source and a clock.
pub struct FrameLoop<D: Display, I: InputSource, C: Clock> {
    world: World,
    renderer: ColumnRenderer,
    buffer: PixelBuffer,
    display: D,
    input: I,
    clock: C,
    fps: FpsCounter,
    state: LoopState,
    /// Seconds the previous frame took; 0 before the first frame.
    elapsed: f32,
    last_frame_ms: u64,
    frame_cap_ms: Option<u64>,
    frames: u64,
}

impl<D: Display, I: InputSource, C: Clock> FrameLoop<D, I, C> {
    /// Allocate the pixel buffer at the display's size and start `Running`.
    pub fn new(world: World, renderer: ColumnRenderer, display: D, input: I, clock: C) -> Self {
        let (w, h) = display.pixel_size();
        let now = clock.now_millis();
        log::info!(
            "map {}x{}, spawn ({:.2}, {:.2}), surface {}x{} px",
            world.map.width(),
            world.map.height(),
            world.player.x,
            world.player.y,
            w,
            h
        );
        Self {
            world,
            renderer,
            buffer: PixelBuffer::new(w, h),
            display,
            input,
            clock,
            fps: FpsCounter::new(now),
            state: LoopState::Running,
            elapsed: 0.0,
            last_frame_ms: now,
            frame_cap_ms: None,
            frames: 0,
        }
    }

    /// Cap the frame rate by sleeping out the rest of each frame.
    pub fn with_frame_cap_ms(mut self, cap_ms: Option<u64>) -> Self {
        self.frame_cap_ms = cap_ms;
        self
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &PlayerState {
        &self.world.player
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Run one full frame. Does nothing once `Terminated`.
    pub fn run_frame(&mut self) -> Result<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }
        let frame_start = self.clock.now_millis();

        let mut quit = false;
        let mut pointer_dx = 0.0f32;
        while let Some(event) = self.input.poll_event()? {
            match event {
                InputEvent::Quit => quit = true,
                InputEvent::PointerMotion { dx, .. } => pointer_dx += dx,
                InputEvent::Resize { cols, rows } => self.resize(cols, rows)?,
            }
        }

        let keys = self.input.held_keys();
        if keys.quit {
            quit = true;
        }

        let World {
            map,
            player,
            config,
        } = &mut self.world;
        apply_movement(
            player,
            map,
            &MoveInput {
                keys,
                pointer_dx,
                dt: self.elapsed,
            },
            config.mouse_sensitivity(),
        );

        self.renderer.render_frame(&mut self.buffer, player, map, config);
        self.display.present(&self.buffer)?;

        if let Some(cap) = self.frame_cap_ms {
            let spent = self.clock.now_millis().saturating_sub(frame_start);
            if spent < cap {
                self.clock.sleep_ms(cap - spent);
            }
        }

        let now = self.clock.now_millis();
        self.elapsed = now.saturating_sub(self.last_frame_ms) as f32 / 1000.0;
        self.last_frame_ms = now;
        self.frames += 1;

        if let Some(fps) = self.fps.tick(now) {
            log::debug!("{} | FPS: {}", WINDOW_TITLE, fps);
            self.display.set_fps(fps)?;
        }

        if quit {
            log::info!("quit requested after {} frames", self.frames);
            self.state = LoopState::Terminated;
        }
        Ok(self.state)
    }

    /// Run frames until terminated.
    pub fn run(&mut self) -> Result<RunSummary> {
        while self.state == LoopState::Running {
            self.run_frame()?;
        }
        Ok(RunSummary {
            frames: self.frames,
            last_fps: self.fps.fps(),
        })
    }

    fn resize(&mut self, cols: u16, rows: u16) -> Result<()> {
        self.display.resize(cols, rows)?;
        let (w, h) = self.display.pixel_size();
        log::debug!("resize to {}x{} cells, {}x{} px", cols, rows, w, h);
        self.buffer.resize(w, h);
        Ok(())
    }
}
