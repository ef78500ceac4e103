//! Column renderer - one cast per screen column, one column of pixels out
//!
//! For column `x` the ray angle sweeps the field of view left to right:
//! `angle - fov/2 + (x / width) * fov`. The hit distance gives the wall
//! slice: `ceiling = h/2 - h/distance`, `floor = h - ceiling`. Rows at or
//! above the ceiling are black, rows down to the floor are wall, the rest
//! is a grey floor gradient that darkens toward the horizon regardless of
//! ray distance.
//!
//! Wall color comes from a fixed symbol table and is dimmed by
//! `1 / (distance + 1.7)`.

use crate::caster::{cast, RayHit};
use crate::config::RenderConfig;
use crate::grid_map::GridMap;
use crate::pixel_buffer::PixelBuffer;
use crate::player::PlayerState;
use crate::types::{Rgb, Symbol, ALPHA_OPAQUE, BRICK_TILE, SLATE_TILE, WALL_TILE};

/// Ceiling fill.
pub const CEILING_COLOR: u32 = ALPHA_OPAQUE;

/// Distances below this are treated as touching the wall.
pub const MIN_WALL_DISTANCE: f32 = 1e-3;

/// Offset in the wall dimming denominator.
pub const WALL_SHADE_OFFSET: f32 = 1.7;

/// Floor brightness at the bottom row.
pub const FLOOR_MAX_BRIGHTNESS: f32 = 96.0;

const DEFAULT_WALL_COLORS: [(Symbol, Rgb); 3] = [
    (WALL_TILE, Rgb::grey(255)),
    (BRICK_TILE, Rgb::new(230, 110, 80)),
    (SLATE_TILE, Rgb::new(120, 150, 230)),
];

/// Symbol to base wall color table.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPalette {
    colors: [Option<Rgb>; 256],
    fallback: Rgb,
}

impl WallPalette {
    /// Empty table; every symbol maps to `fallback`.
    pub fn new(fallback: Rgb) -> Self {
        Self {
            colors: [None; 256],
            fallback,
        }
    }

    pub fn with(mut self, symbol: Symbol, color: Rgb) -> Self {
        self.colors[symbol as usize] = Some(color);
        self
    }

    /// Base color for a hit tile. Unmapped symbols and misses use the fallback.
    #[inline(always)]
    pub fn base(&self, tile: Option<Symbol>) -> Rgb {
        tile.and_then(|s| self.colors[s as usize])
            .unwrap_or(self.fallback)
    }

    /// Distance-dimmed packed wall color.
    #[inline]
    pub fn shade(&self, tile: Option<Symbol>, distance: f32) -> u32 {
        let denom = distance.max(0.0) + WALL_SHADE_OFFSET;
        self.base(tile).scaled(1.0 / denom).pack()
    }
}

impl Default for WallPalette {
    fn default() -> Self {
        DEFAULT_WALL_COLORS
            .iter()
            .fold(Self::new(Rgb::grey(255)), |p, &(s, c)| p.with(s, c))
    }
}

/// Vertical extent of a wall in one column.
///
/// Rows `y <= ceiling` are ceiling, `ceiling < y <= floor` are wall, the rest floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSlice {
    pub ceiling: i32,
    pub floor: i32,
}

impl WallSlice {
    /// Number of wall rows visible in a column of `height`.
    pub fn visible_rows(&self, height: usize) -> usize {
        let top = (self.ceiling + 1).max(0);
        let bottom = self.floor.min(height as i32 - 1);
        (bottom - top + 1).max(0) as usize
    }
}

/// Wall slice for a hit at `distance` in a column of `screen_height` rows.
#[inline]
pub fn wall_slice(distance: f32, screen_height: usize) -> WallSlice {
    let h = screen_height as f32;
    let ceiling = if distance.is_finite() && distance >= MIN_WALL_DISTANCE {
        (h / 2.0 - h / distance).max(-h) as i32
    } else {
        0
    };
    WallSlice {
        ceiling,
        floor: screen_height as i32 - ceiling,
    }
}

/// Ray angle of column `x` in a screen `width` columns wide.
#[inline]
pub fn ray_angle(x: usize, width: usize, player_angle: f32, fov: f32) -> f32 {
    (player_angle - fov / 2.0) + (x as f32 / width as f32) * fov
}

/// Floor gradient for row `y`: brighter toward the bottom edge.
#[inline]
pub fn floor_shade(y: usize, screen_height: usize) -> u32 {
    let half = screen_height as f32 / 2.0;
    let b = (y as f32 - half) / half;
    let v = (FLOOR_MAX_BRIGHTNESS * b).clamp(0.0, 255.0) as u8;
    Rgb::grey(v).pack()
}

/// Drives the caster per column and fills the pixel buffer.
///
/// Keeps the per-row floor gradient cached; it depends only on the buffer
/// height and is rebuilt when that changes.
#[derive(Debug, Clone)]
pub struct ColumnRenderer {
    palette: WallPalette,
    floor_rows: Vec<u32>,
}

impl ColumnRenderer {
    pub fn new(palette: WallPalette) -> Self {
        Self {
            palette,
            floor_rows: Vec::new(),
        }
    }

    pub fn palette(&self) -> &WallPalette {
        &self.palette
    }

    fn prepare(&mut self, height: usize) {
        if self.floor_rows.len() == height {
            return;
        }
        self.floor_rows.clear();
        self.floor_rows
            .extend((0..height).map(|y| floor_shade(y, height)));
    }

    /// Cast for column `x` and write exactly `buf.height()` pixels into it.
    pub fn render_column(
        &mut self,
        buf: &mut PixelBuffer,
        x: usize,
        player: &PlayerState,
        map: &GridMap,
        config: &RenderConfig,
    ) -> RayHit {
        let height = buf.height();
        self.prepare(height);

        let angle = ray_angle(x, buf.width(), player.angle, config.fov());
        let hit = cast(player.position(), angle, map, config.render_distance());

        let slice = wall_slice(hit.distance, height);
        let wall = self.palette.shade(hit.tile, hit.distance);
        let floor_rows = &self.floor_rows;
        buf.write_column(
            x,
            floor_rows.iter().enumerate().map(|(y, &floor)| {
                let yi = y as i32;
                if yi <= slice.ceiling {
                    CEILING_COLOR
                } else if yi <= slice.floor {
                    wall
                } else {
                    floor
                }
            }),
        );
        hit
    }

    /// Render every column `0..width` of `buf`.
    pub fn render_frame(
        &mut self,
        buf: &mut PixelBuffer,
        player: &PlayerState,
        map: &GridMap,
        config: &RenderConfig,
    ) {
        for x in 0..buf.width() {
            self.render_column(buf, x, player, map, config);
        }
    }
}

impl Default for ColumnRenderer {
    fn default() -> Self {
        Self::new(WallPalette::default())
    }
}
