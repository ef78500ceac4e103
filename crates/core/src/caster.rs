//! Ray caster - grid traversal from a point to the nearest solid tile
//!
//! A ray leaves `origin` along `(sin(angle), cos(angle))`. Instead of marching
//! in fixed steps, each iteration jumps straight to the next vertical or
//! horizontal grid line, whichever the ray reaches first, and inspects the
//! tile on the far side. A small epsilon is added to every jump so the
//! traversal position always lands strictly inside the next tile, which
//! guarantees forward progress on grid-aligned rays and corner crossings.
//! Far from the origin the epsilon can fall below the spacing of `f32`
//! values; the accumulated distance then advances by one representable step
//! instead, so it strictly increases every iteration.
//!
//! A direction component of exactly zero yields an infinite distance to that
//! axis' next grid line, meaning the ray never crosses it.
//!
//! Termination:
//! - the traversal position leaves the map: `distance = render_distance`, no tile
//! - the accumulated distance reaches `render_distance`: `distance = render_distance`, no tile
//! - the tile under the traversal position is solid: that distance and symbol
//!
//! The caster holds no state; identical inputs give bit-identical results.

use crate::grid_map::GridMap;
use crate::types::Symbol;

/// Nudge added to every grid-line jump.
pub const STEP_EPSILON: f32 = 1e-4;

/// Result of a single cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance travelled along the ray, in `[0, render_distance]`. Misses
    /// report exactly `render_distance`; hits are strictly closer.
    pub distance: f32,
    /// Solid symbol that stopped the ray, `None` if the ray ran out of range
    /// or left the grid.
    pub tile: Option<Symbol>,
}

impl RayHit {
    #[inline]
    fn miss(render_distance: f32) -> Self {
        Self {
            distance: render_distance,
            tile: None,
        }
    }

    pub fn is_wall(&self) -> bool {
        self.tile.is_some()
    }
}

/// Parametric distance from fractional offset `frac` to the next grid line
/// along direction component `dir`.
#[inline(always)]
fn dist_to_next_line(frac: f32, dir: f32) -> f32 {
    if dir == 0.0 {
        return f32::INFINITY;
    }
    let target = if dir < 0.0 { 0.0 } else { 1.0 };
    (target - frac) / dir + STEP_EPSILON
}

/// `distance + step`, or the next representable value when `step` is lost
/// to rounding.
#[inline(always)]
fn advance(distance: f32, step: f32) -> f32 {
    let next = distance + step;
    if next > distance {
        next
    } else {
        f32::from_bits(distance.to_bits() + 1)
    }
}

/// Cast a ray from `origin` at `angle` through `map`.
pub fn cast(origin: (f32, f32), angle: f32, map: &GridMap, render_distance: f32) -> RayHit {
    let (eye_x, eye_y) = angle.sin_cos();
    cast_dir(origin, (eye_x, eye_y), map, render_distance)
}

/// Cast along an explicit unit direction `(eye_x, eye_y)`.
pub fn cast_dir(origin: (f32, f32), eye: (f32, f32), map: &GridMap, render_distance: f32) -> RayHit {
    let (ox, oy) = origin;
    let (eye_x, eye_y) = eye;

    if render_distance.is_nan() || render_distance <= 0.0 {
        return RayHit::miss(0.0);
    }
    if !ox.is_finite() || !oy.is_finite() {
        return RayHit::miss(render_distance);
    }
    if !eye_x.is_finite() || !eye_y.is_finite() || (eye_x == 0.0 && eye_y == 0.0) {
        return RayHit::miss(render_distance);
    }

    let mut distance = 0.0f32;
    let mut px = ox;
    let mut py = oy;

    loop {
        if !map.contains(px, py) {
            return RayHit::miss(render_distance);
        }

        // A wall reached on the jump past the range is out of sight.
        if distance >= render_distance {
            return RayHit::miss(render_distance);
        }

        let tx = px.floor();
        let ty = py.floor();
        if let Some(symbol) = map.solid_at(tx as i32, ty as i32) {
            return RayHit {
                distance,
                tile: Some(symbol),
            };
        }

        let step_x = dist_to_next_line(px - tx, eye_x);
        let step_y = dist_to_next_line(py - ty, eye_y);
        let step = step_x.min(step_y);
        if !step.is_finite() {
            return RayHit::miss(render_distance);
        }

        distance = advance(distance, step.max(STEP_EPSILON));
        px = ox + distance * eye_x;
        py = oy + distance * eye_y;
    }
}
