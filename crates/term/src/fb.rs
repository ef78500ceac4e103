//! Character-cell framebuffer for terminal presentation.
//!
//! A pixel frame is folded into cells two rows at a time: each cell is an
//! upper half block whose foreground is the top pixel and whose background is
//! the bottom pixel. Text overlays use ordinary glyph cells.

pub use crate::types::Rgb;

/// Upper half block glyph.
pub const HALF_BLOCK: char = '▀';

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Cell {
    /// Two stacked pixels.
    #[inline(always)]
    pub const fn half_block(top: Rgb, bottom: Rgb) -> Self {
        Self {
            ch: HALF_BLOCK,
            fg: top,
            bg: bottom,
            bold: false,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::grey(220),
            bg: Rgb::default(),
            bold: false,
        }
    }
}

/// Row-major grid of cells, reused across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize in place; the allocation is kept when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    pub fn row_mut(&mut self, y: u16) -> &mut [Cell] {
        if y >= self.height {
            return &mut [];
        }
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.cells[start..start + w]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(x as usize).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(c) = self.row_mut(y).get_mut(x as usize) {
            *c = cell;
        }
    }

    /// Write `text` left to right from `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb, bold: bool) {
        let row = self.row_mut(y);
        for (slot, ch) in row.iter_mut().skip(x as usize).zip(text.chars()) {
            *slot = Cell { ch, fg, bg, bold };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "FPS", Rgb::grey(255), Rgb::default(), true);
        assert_eq!(fb.get(2, 0).unwrap().ch, 'F');
        assert_eq!(fb.get(3, 0).unwrap().ch, 'P');
        assert!(fb.get(3, 0).unwrap().bold);
        assert_eq!(fb.get(4, 0), None);
    }

    #[test]
    fn out_of_range_rows_are_empty() {
        let mut fb = FrameBuffer::new(2, 2);
        assert!(fb.row(2).is_empty());
        fb.set(0, 5, Cell::default());
        fb.put_str(0, 9, "x", Rgb::default(), Rgb::default(), false);
    }
}
