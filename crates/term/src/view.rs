//! Pixel buffer to character cells.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::PixelBuffer;
use crate::fb::{Cell, FrameBuffer};
use crate::types::Rgb;

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Pixel resolution: one pixel per column, two per row.
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize * 2)
    }
}

/// Folds pixel rows pairwise into half-block cells.
#[derive(Debug, Clone, Copy)]
pub struct HalfBlockView {
    status_fg: Rgb,
    status_bg: Rgb,
}

impl Default for HalfBlockView {
    fn default() -> Self {
        Self {
            status_fg: Rgb::new(255, 255, 160),
            status_bg: Rgb::new(0, 0, 0),
        }
    }
}

impl HalfBlockView {
    /// Rewrite every cell of `fb` from `frame`. `fb` is resized to fit.
    ///
    /// An odd last pixel row is paired with black.
    pub fn render_into(&self, frame: &PixelBuffer, fb: &mut FrameBuffer) {
        let w = frame.width();
        let h = frame.height();
        let cols = w.min(u16::MAX as usize) as u16;
        let rows = h.div_ceil(2).min(u16::MAX as usize) as u16;
        fb.resize(cols, rows);

        let pixels = frame.pixels();
        for cy in 0..rows {
            let top = cy as usize * 2 * w;
            let bottom = top + w;
            let has_bottom = (cy as usize) * 2 + 1 < h;
            for (x, cell) in fb.row_mut(cy).iter_mut().enumerate() {
                let t = Rgb::unpack(pixels[top + x]);
                let b = if has_bottom {
                    Rgb::unpack(pixels[bottom + x])
                } else {
                    Rgb::default()
                };
                *cell = Cell::half_block(t, b);
            }
        }
    }

    /// FPS readout in the top-left corner.
    pub fn draw_fps(&self, fb: &mut FrameBuffer, fps: u32) {
        let mut text = ArrayString::<16>::new();
        if write!(text, " FPS {} ", fps).is_ok() {
            fb.put_str(0, 0, &text, self.status_fg, self.status_bg, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::HALF_BLOCK;

    #[test]
    fn viewport_doubles_vertical_resolution() {
        assert_eq!(Viewport::new(80, 24).pixel_size(), (80, 48));
    }

    #[test]
    fn pixel_pairs_become_half_blocks() {
        let mut frame = PixelBuffer::new(2, 3);
        frame.set(0, 0, Rgb::new(1, 2, 3).pack());
        frame.set(0, 1, Rgb::new(4, 5, 6).pack());
        frame.set(1, 2, Rgb::new(7, 8, 9).pack());

        let mut fb = FrameBuffer::new(0, 0);
        HalfBlockView::default().render_into(&frame, &mut fb);
        assert_eq!((fb.width(), fb.height()), (2, 2));

        let c = fb.get(0, 0).unwrap();
        assert_eq!(c.ch, HALF_BLOCK);
        assert_eq!(c.fg, Rgb::new(1, 2, 3));
        assert_eq!(c.bg, Rgb::new(4, 5, 6));

        // Odd trailing row pairs with black.
        let c = fb.get(1, 1).unwrap();
        assert_eq!(c.fg, Rgb::new(7, 8, 9));
        assert_eq!(c.bg, Rgb::default());
    }

    #[test]
    fn fps_overlay_writes_text() {
        let mut fb = FrameBuffer::new(20, 2);
        HalfBlockView::default().draw_fps(&mut fb, 57);
        let line: String = fb.row(0).iter().map(|c| c.ch).collect();
        assert!(line.starts_with(" FPS 57 "));
    }
}
