//! Pixel buffer - the software render target.
//!
//! Packed `0xAARRGGBB` values, row-major (`y * width + x`). Allocated once and
//! overwritten every frame; `resize` keeps the allocation when it can.

use crate::types::{Rgb, ALPHA_OPAQUE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![ALPHA_OPAQUE; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Resize the buffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, ALPHA_OPAQUE);
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn get_rgb(&self, x: usize, y: usize) -> Option<Rgb> {
        self.get(x, y).map(Rgb::unpack)
    }

    pub fn set(&mut self, x: usize, y: usize, argb: u32) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = argb;
        }
    }

    pub fn clear(&mut self, argb: u32) {
        self.pixels.fill(argb);
    }

    /// Write `column` top to bottom into column `x`.
    ///
    /// Only pixels of column `x` are touched; extra entries are ignored.
    pub fn write_column(&mut self, x: usize, column: impl IntoIterator<Item = u32>) {
        if x >= self.width {
            return;
        }
        let stride = self.width;
        for (y, argb) in column.into_iter().take(self.height).enumerate() {
            self.pixels[y * stride + x] = argb;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_opaque_black() {
        let buf = PixelBuffer::new(3, 2);
        assert!(buf.pixels().iter().all(|&p| p == ALPHA_OPAQUE));
        assert_eq!(buf.pixels().len(), 6);
    }

    #[test]
    fn write_column_stays_in_its_column() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.write_column(1, [1, 2, 3]);
        assert_eq!(buf.pixels(), &[ALPHA_OPAQUE, 1, ALPHA_OPAQUE, ALPHA_OPAQUE, 2, ALPHA_OPAQUE]);
    }

    #[test]
    fn out_of_range_access_is_ignored() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set(5, 0, 7);
        assert_eq!(buf.get(5, 0), None);
        buf.write_column(2, [9]);
        assert!(buf.pixels().iter().all(|&p| p == ALPHA_OPAQUE));
    }
}
