//! Movement - turning and collision-checked walking
//!
//! Each frame the player turns by the accumulated pointer delta, then every
//! held movement key is tried in scan order (W, S, A, D). A key's displacement
//! is applied as one tentative position; if the tile containing that position
//! is solid or off the map, the displacement is discarded and the player stays
//! where it was before that key. There is no wall sliding: a diagonal press
//! into a corner resolves per key, so scan order decides the outcome.

use arrayvec::ArrayVec;

use crate::grid_map::GridMap;
use crate::player::PlayerState;
use crate::types::{HeldKeys, Key};

/// Per-frame movement input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveInput {
    pub keys: HeldKeys,
    /// Accumulated horizontal pointer motion for this frame.
    pub pointer_dx: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
}

/// Which keys moved the player and which were blocked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub committed: ArrayVec<Key, 4>,
    pub blocked: ArrayVec<Key, 4>,
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        !self.committed.is_empty()
    }
}

/// Displacement for a movement key given `s = speed*sin*dt`, `c = speed*cos*dt`.
#[inline]
fn displacement(key: Key, s: f32, c: f32) -> (f32, f32) {
    match key {
        Key::Forward => (s, c),
        Key::Backward => (-s, -c),
        Key::StrafeLeft => (-c, s),
        Key::StrafeRight => (c, -s),
        Key::Quit => (0.0, 0.0),
    }
}

/// Turn, then walk, rejecting any step that lands in a blocked tile.
pub fn apply_movement(
    player: &mut PlayerState,
    map: &GridMap,
    input: &MoveInput,
    mouse_sensitivity: f32,
) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    let dt = if input.dt.is_finite() && input.dt > 0.0 {
        input.dt
    } else {
        0.0
    };

    let turn = input.pointer_dx * dt * mouse_sensitivity;
    if turn.is_finite() {
        player.angle += turn;
    }

    if dt == 0.0 || player.speed == 0.0 || !input.keys.any_movement() {
        return outcome;
    }

    let (sin, cos) = player.angle.sin_cos();
    let s = player.speed * sin * dt;
    let c = player.speed * cos * dt;

    for key in Key::MOVEMENT {
        if !input.keys.is_down(key) {
            continue;
        }
        let (dx, dy) = displacement(key, s, c);
        let nx = player.x + dx;
        let ny = player.y + dy;

        let open = matches!(map.tile_at_point(nx, ny), Some(sym) if !map.is_solid(sym));
        if open {
            player.x = nx;
            player.y = ny;
            outcome.committed.push(key);
        } else {
            log::trace!(
                "{} blocked at ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                key.as_str(),
                player.x,
                player.y,
                nx,
                ny
            );
            outcome.blocked.push(key);
        }
    }

    outcome
}
