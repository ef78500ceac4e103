//! Terminal display surface for the frame loop.

use std::fmt::Write as _;

use anyhow::Result;
use arrayvec::ArrayString;

use crate::core::PixelBuffer;
use crate::engine::Display;
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::WINDOW_TITLE;
use crate::view::{HalfBlockView, Viewport};

/// Presents pixel buffers as half-block cells on the terminal.
pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: HalfBlockView,
    fb: FrameBuffer,
    viewport: Viewport,
    show_fps: bool,
    fps: Option<u32>,
}

impl TerminalDisplay {
    pub fn new(viewport: Viewport, show_fps: bool) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: HalfBlockView::default(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            show_fps,
            fps: None,
        }
    }

    /// Size the display to the current terminal.
    pub fn from_terminal(show_fps: bool) -> std::io::Result<Self> {
        let (w, h) = crossterm::terminal::size()?;
        Ok(Self::new(Viewport::new(w, h), show_fps))
    }

    pub fn enter(&mut self) -> std::io::Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> std::io::Result<()> {
        self.renderer.exit()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Display for TerminalDisplay {
    fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        self.view.render_into(frame, &mut self.fb);
        if let (true, Some(fps)) = (self.show_fps, self.fps) {
            self.view.draw_fps(&mut self.fb, fps);
        }
        self.renderer.draw_swap(&mut self.fb)
    }

    fn pixel_size(&self) -> (usize, usize) {
        self.viewport.pixel_size()
    }

    fn resize(&mut self, cols: u16, rows: u16) -> Result<()> {
        self.viewport = Viewport::new(cols, rows);
        self.renderer.invalidate();
        Ok(())
    }

    fn set_fps(&mut self, fps: u32) -> Result<()> {
        self.fps = Some(fps);
        let mut title = ArrayString::<64>::new();
        if write!(title, "{} | FPS: {}", WINDOW_TITLE, fps).is_ok() {
            self.renderer.set_title(&title)?;
        }
        Ok(())
    }
}
