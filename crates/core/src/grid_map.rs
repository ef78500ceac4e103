//! Grid map module - the static tile world
//!
//! The map is a `width x height` grid of tile symbols with a declared set of
//! solid symbols. Uses a flat array (row-major, `y * width + x`) for cache
//! locality and a 256-entry lookup table for solid membership so the hot
//! paths (ray casting, collision) never scan the solid set.
//!
//! Coordinates: `(x, y)` where x grows left to right, y grows top to bottom in
//! the authored ASCII rows. Lookups outside the grid return `None`, which is a
//! defined outcome and never a solid-set hit.

use crate::error::{ConfigError, Result};
use crate::types::{Symbol, BRICK_TILE, EMPTY_TILE, SLATE_TILE, WALL_TILE};

/// Built-in 16x16 level.
const BUILTIN_ROWS: [&str; 16] = [
    "################",
    "#..............#",
    "#.BB........SS.#",
    "#.B..........S.#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#..............#",
    "#.S..........B.#",
    "#.SS........BB.#",
    "#..............#",
    "################",
];

/// Solid symbols of the built-in level, in declared order.
pub const BUILTIN_SOLID: [Symbol; 3] = [WALL_TILE, BRICK_TILE, SLATE_TILE];

/// Immutable tile grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Symbol>,
    /// Solid symbols in declared order (duplicates dropped)
    solid: Vec<Symbol>,
    /// Membership table indexed by symbol
    solid_lut: [bool; 256],
}

impl GridMap {
    /// Build a map from a flat tile sequence.
    ///
    /// Fails when a dimension is zero, the tile count is not `width * height`,
    /// the solid set is empty, or the empty tile symbol is declared solid.
    pub fn new(width: usize, height: usize, tiles: Vec<Symbol>, solid: &[Symbol]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        let expected = width * height;
        if tiles.len() != expected {
            return Err(ConfigError::TileCountMismatch {
                width,
                height,
                expected,
                actual: tiles.len(),
            });
        }
        if solid.is_empty() {
            return Err(ConfigError::NoSolidSymbols);
        }
        if solid.contains(&EMPTY_TILE) {
            return Err(ConfigError::EmptySymbolSolid(EMPTY_TILE));
        }
        Ok(Self::from_parts(width, height, tiles, solid))
    }

    /// Build a map from ASCII rows. All rows must have the same length.
    ///
    /// ```
    /// use tui_raycaster_core::GridMap;
    ///
    /// let map = GridMap::from_rows(&["###", "#.#", "###"], b"#").unwrap();
    /// assert_eq!(map.get(1, 1), Some(b'.'));
    /// assert_eq!(map.get(3, 0), None);
    /// assert!(map.is_solid(b'#'));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S], solid: &[Symbol]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut tiles = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let bytes = line.as_ref().as_bytes();
            if bytes.len() != width {
                return Err(ConfigError::RaggedRow {
                    row,
                    expected: width,
                    actual: bytes.len(),
                });
            }
            tiles.extend_from_slice(bytes);
        }
        Self::new(width, height, tiles, solid)
    }

    /// The built-in 16x16 level with three wall materials.
    pub fn builtin() -> Self {
        let mut tiles = Vec::with_capacity(16 * 16);
        for row in BUILTIN_ROWS {
            tiles.extend_from_slice(row.as_bytes());
        }
        Self::from_parts(16, 16, tiles, &BUILTIN_SOLID)
    }

    /// Rows of the built-in level, for settings files and tests.
    pub fn builtin_rows() -> &'static [&'static str] {
        &BUILTIN_ROWS
    }

    fn from_parts(width: usize, height: usize, tiles: Vec<Symbol>, solid: &[Symbol]) -> Self {
        let mut declared = Vec::with_capacity(solid.len());
        let mut solid_lut = [false; 256];
        for &s in solid {
            if !solid_lut[s as usize] {
                solid_lut[s as usize] = true;
                declared.push(s);
            }
        }
        Self {
            width,
            height,
            tiles,
            solid: declared,
            solid_lut,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[Symbol] {
        &self.tiles
    }

    /// Solid symbols in declared order.
    pub fn solid_symbols(&self) -> &[Symbol] {
        &self.solid
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Tile at `(x, y)`. Returns `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Symbol> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Whether `symbol` is in the solid set.
    #[inline(always)]
    pub fn is_solid(&self, symbol: Symbol) -> bool {
        self.solid_lut[symbol as usize]
    }

    /// The solid symbol at `(x, y)`, or `None` for open or out-of-bounds tiles.
    #[inline]
    pub fn solid_at(&self, x: i32, y: i32) -> Option<Symbol> {
        self.get(x, y).filter(|&s| self.is_solid(s))
    }

    /// Whether a body may not occupy `(x, y)`: out of bounds or solid.
    #[inline]
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        match self.get(x, y) {
            Some(s) => self.is_solid(s),
            None => true,
        }
    }

    /// Whether the continuous point `(x, y)` lies in `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f32 && y < self.height as f32
    }

    /// Tile containing the continuous point `(x, y)` (floored).
    #[inline]
    pub fn tile_at_point(&self, x: f32, y: f32) -> Option<Symbol> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        self.get(x.floor() as i32, y.floor() as i32)
    }
}
