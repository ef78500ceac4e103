//! Ray caster tests - grid traversal, termination and numeric edge cases

use proptest::prelude::*;
use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tui_raycaster::core::{cast, GridMap, STEP_EPSILON};
use tui_raycaster::types::{BRICK_TILE, WALL_TILE};

fn room3() -> GridMap {
    GridMap::from_rows(&["###", "#.#", "###"], b"#").unwrap()
}

/// Open `w x h` grid without any solid tile.
fn open_grid(w: usize, h: usize) -> GridMap {
    GridMap::new(w, h, vec![b'.'; w * h], b"#").unwrap()
}

/// One corridor row along +x with a wall `d` tiles past x = 1.
fn corridor_x(d: usize) -> GridMap {
    let wall = "#".repeat(d + 2);
    let mid = format!("#{}#", ".".repeat(d));
    GridMap::from_rows(&[wall.as_str(), mid.as_str(), wall.as_str()], b"#").unwrap()
}

/// One corridor column along +y with a wall `d` tiles past y = 1.
fn corridor_y(d: usize) -> GridMap {
    let mut rows = vec!["###".to_string()];
    for _ in 0..d {
        rows.push("#.#".to_string());
    }
    rows.push("###".to_string());
    GridMap::from_rows(rows.as_slice(), b"#").unwrap()
}

#[test]
fn test_center_of_3x3_room_hits_wall_half_a_tile_away() {
    let hit = cast((1.5, 1.5), 0.0, &room3(), 16.0);
    assert!(hit.is_wall());
    assert_eq!(hit.tile, Some(WALL_TILE));
    assert!((hit.distance - 0.5).abs() <= 2.0 * STEP_EPSILON, "{hit:?}");
}

#[test]
fn test_every_cardinal_direction_hits_the_border() {
    let map = room3();
    for angle in [0.0, FRAC_PI_2, PI, -FRAC_PI_2] {
        let hit = cast((1.5, 1.5), angle, &map, 16.0);
        assert_eq!(hit.tile, Some(WALL_TILE), "angle {angle}");
        assert!((hit.distance - 0.5).abs() < 1e-3, "angle {angle}: {hit:?}");
    }
}

#[test]
fn test_diagonal_ray_through_a_corner() {
    // From the exact center of tile (1,1) a 45 degree ray crosses both grid
    // lines at the same point; the corner tile must still be found.
    let hit = cast((1.5, 1.5), PI / 4.0, &room3(), 16.0);
    assert_eq!(hit.tile, Some(WALL_TILE));
    assert!((hit.distance - 0.5 * 2f32.sqrt()).abs() < 1e-3, "{hit:?}");
}

#[test]
fn test_hit_reports_the_material_of_the_tile() {
    let map = GridMap::from_rows(&["#B#", "#.#", "###"], b"#B").unwrap();
    let hit = cast((1.5, 1.5), PI, &map, 16.0);
    assert_eq!(hit.tile, Some(BRICK_TILE));
}

#[test]
fn test_open_grid_exhausts_range_or_leaves_bounds() {
    let map = open_grid(64, 64);
    let hit = cast((32.5, 32.5), 0.3, &map, 8.0);
    assert!(!hit.is_wall());
    assert_eq!(hit.distance, 8.0);
}

#[test]
fn test_non_positive_render_distance_is_a_zero_miss() {
    let hit = cast((1.5, 1.5), 0.0, &room3(), 0.0);
    assert_eq!((hit.distance, hit.tile), (0.0, None));
    let hit = cast((1.5, 1.5), 0.0, &room3(), f32::NAN);
    assert_eq!((hit.distance, hit.tile), (0.0, None));
}

#[test]
fn test_non_finite_inputs_do_not_hang() {
    let map = room3();
    for origin in [(f32::NAN, 1.5), (1.5, f32::INFINITY)] {
        let hit = cast(origin, 0.0, &map, 16.0);
        assert_eq!((hit.distance, hit.tile), (16.0, None));
    }
    let hit = cast((1.5, 1.5), f32::NAN, &map, 16.0);
    assert_eq!((hit.distance, hit.tile), (16.0, None));
}

#[test]
fn test_wide_corridor_cast_terminates() {
    // Past 2048 tiles the step epsilon is smaller than the f32 spacing of
    // the accumulated distance. Runs on a worker so a regression fails
    // instead of hanging the suite.
    for w in [2100usize, 4097] {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let map = corridor_x(w - 2);
            let _ = tx.send(cast((w as f32 - 1.5, 1.5), -FRAC_PI_2, &map, 10_000.0));
        });
        let hit = rx
            .recv_timeout(Duration::from_secs(10))
            .unwrap_or_else(|_| panic!("cast along a {w}-wide corridor did not return"));
        assert_eq!(hit.tile, Some(WALL_TILE), "width {w}");
        assert!((hit.distance - (w as f32 - 2.5)).abs() < 0.01, "width {w}: {hit:?}");
    }
}

#[test]
fn test_wall_beyond_render_distance_is_out_of_sight() {
    // The wall face sits at x = 19, 16.5 tiles ahead.
    let map = corridor_x(18);
    let hit = cast((2.5, 1.5), FRAC_PI_2, &map, 16.0);
    assert_eq!((hit.distance, hit.tile), (16.0, None));

    let hit = cast((2.5, 1.5), FRAC_PI_2, &map, 17.0);
    assert_eq!(hit.tile, Some(WALL_TILE));
    assert!((hit.distance - 16.5).abs() < 1e-3, "{hit:?}");
}

proptest! {
    #[test]
    fn prop_open_grid_never_hits(
        ox in 0.01f32..15.99,
        oy in 0.01f32..15.99,
        angle in -10.0f32..10.0,
        rd in 0.5f32..32.0,
    ) {
        let map = open_grid(16, 16);
        let hit = cast((ox, oy), angle, &map, rd);
        prop_assert_eq!(hit.tile, None);
        prop_assert_eq!(hit.distance, rd);
    }

    #[test]
    fn prop_axis_aligned_wall_distance(d in 1usize..12) {
        let hit = cast((1.0, 1.5), FRAC_PI_2, &corridor_x(d), 32.0);
        prop_assert_eq!(hit.tile, Some(WALL_TILE));
        prop_assert!((hit.distance - d as f32).abs() <= 2.0 * STEP_EPSILON + 1e-4, "{:?}", hit);

        let hit = cast((1.5, 1.0), 0.0, &corridor_y(d), 32.0);
        prop_assert_eq!(hit.tile, Some(WALL_TILE));
        prop_assert!((hit.distance - d as f32).abs() <= 2.0 * STEP_EPSILON + 1e-4, "{:?}", hit);
    }

    #[test]
    fn prop_cast_is_idempotent(
        ox in 1.01f32..14.99,
        oy in 1.01f32..14.99,
        angle in -10.0f32..10.0,
    ) {
        let map = GridMap::builtin();
        let a = cast((ox, oy), angle, &map, 16.0);
        let b = cast((ox, oy), angle, &map, 16.0);
        prop_assert_eq!(a.distance.to_bits(), b.distance.to_bits());
        prop_assert_eq!(a.tile, b.tile);
    }

    #[test]
    fn prop_hits_stay_inside_render_distance(
        ox in 1.01f32..14.99,
        oy in 1.01f32..14.99,
        angle in -10.0f32..10.0,
        rd in 0.5f32..12.0,
    ) {
        let map = GridMap::builtin();
        let hit = cast((ox, oy), angle, &map, rd);
        if hit.is_wall() {
            prop_assert!(hit.distance < rd, "{:?} rd {}", hit, rd);
        } else {
            prop_assert_eq!(hit.distance, rd);
        }
    }

    #[test]
    fn prop_closed_map_always_hits_within_range(
        ox in 1.01f32..14.99,
        oy in 1.01f32..14.99,
        angle in -10.0f32..10.0,
    ) {
        // The built-in level is closed and fits well inside 32 tiles.
        let map = GridMap::builtin();
        prop_assume!(map.tile_at_point(ox, oy).map(|s| !map.is_solid(s)).unwrap_or(false));
        let hit = cast((ox, oy), angle, &map, 32.0);
        prop_assert!(hit.tile.is_some(), "{:?}", hit);
        prop_assert!(hit.distance >= 0.0 && hit.distance < 32.0);
    }
}
