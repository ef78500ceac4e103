//! Column renderer tests - wall slices, column fill and shading

use tui_raycaster::core::{
    floor_shade, wall_slice, ColumnRenderer, GridMap, PixelBuffer, PlayerState, RenderConfig,
    WallPalette, CEILING_COLOR, MIN_WALL_DISTANCE,
};
use tui_raycaster::types::{Rgb, ALPHA_OPAQUE, BRICK_TILE, DEFAULT_FOV};

const SENTINEL: u32 = 0x1234_5678;

fn room3() -> GridMap {
    GridMap::from_rows(&["###", "#.#", "###"], b"#").unwrap()
}

fn config(render_distance: f32) -> RenderConfig {
    RenderConfig::new(DEFAULT_FOV, render_distance, 0.1).unwrap()
}

#[test]
fn test_slice_is_thinnest_at_render_distance() {
    let h = 120;
    let distances = [0.75, 1.0, 2.0, 4.0, 8.0, 16.0];
    let slices: Vec<_> = distances.iter().map(|&d| wall_slice(d, h)).collect();

    for pair in slices.windows(2) {
        assert!(pair[0].ceiling <= pair[1].ceiling, "{:?}", pair);
        assert!(pair[0].visible_rows(h) >= pair[1].visible_rows(h), "{:?}", pair);
    }
    let far = slices[slices.len() - 1];
    assert!(slices.iter().all(|s| s.ceiling <= far.ceiling));
    assert!(far.ceiling < h as i32 / 2);
}

#[test]
fn test_near_wall_spans_the_whole_column() {
    let h = 120;
    let s = wall_slice(MIN_WALL_DISTANCE * 2.0, h);
    assert_eq!(s.visible_rows(h), h);
    assert_eq!(s.floor, h as i32 - s.ceiling);
}

#[test]
fn test_column_writes_only_its_own_pixels() {
    let map = GridMap::builtin();
    let player = PlayerState::default();
    let mut buf = PixelBuffer::new(8, 24);
    buf.clear(SENTINEL);

    let mut renderer = ColumnRenderer::default();
    renderer.render_column(&mut buf, 3, &player, &map, &config(16.0));

    for y in 0..24 {
        for x in 0..8 {
            let px = buf.get(x, y).unwrap();
            if x == 3 {
                assert_ne!(px, SENTINEL, "({x},{y}) not written");
            } else {
                assert_eq!(px, SENTINEL, "({x},{y}) overwritten");
            }
        }
    }
}

#[test]
fn test_center_column_of_3x3_room_is_all_wall() {
    let map = room3();
    let player = PlayerState::new(1.5, 1.5, 0.0, 1.0);
    let mut buf = PixelBuffer::new(4, 40);
    let mut renderer = ColumnRenderer::default();

    // Column width/2 looks straight along the view direction.
    let hit = renderer.render_column(&mut buf, 2, &player, &map, &config(16.0));
    assert_eq!(hit.tile, Some(b'#'));
    assert!((hit.distance - 0.5).abs() < 1e-3);

    let wall = renderer.palette().shade(hit.tile, hit.distance);
    for y in 0..40 {
        assert_eq!(buf.get(2, y), Some(wall), "row {y}");
    }
    // 255 / (0.5 + 1.7)
    assert_eq!(Rgb::unpack(wall), Rgb::grey(115));
}

#[test]
fn test_distant_miss_draws_ceiling_sliver_and_floor() {
    let map = GridMap::new(64, 64, vec![b'.'; 64 * 64], b"#").unwrap();
    let player = PlayerState::new(32.5, 32.5, 0.0, 1.0);
    let mut buf = PixelBuffer::new(4, 40);
    let mut renderer = ColumnRenderer::new(WallPalette::new(Rgb::new(200, 100, 50)));

    let hit = renderer.render_column(&mut buf, 2, &player, &map, &config(16.0));
    assert_eq!((hit.distance, hit.tile), (16.0, None));

    // ceiling = 20 - 40/16 = 17.5 -> 17, floor = 23
    let slice = wall_slice(16.0, 40);
    assert_eq!((slice.ceiling, slice.floor), (17, 23));

    let wall = renderer.palette().shade(None, 16.0);
    for y in 0..40 {
        let expected = match y {
            0..=17 => CEILING_COLOR,
            18..=23 => wall,
            _ => floor_shade(y, 40),
        };
        assert_eq!(buf.get(2, y), Some(expected), "row {y}");
    }
    assert_eq!(Rgb::unpack(wall), Rgb::new(11, 5, 2));
}

#[test]
fn test_floor_gradient_ignores_distance() {
    let h = 64;
    let bottom = Rgb::unpack(floor_shade(h - 1, h));
    assert_eq!(bottom.r, bottom.g);
    assert!(bottom.r > 90);
    assert_eq!(floor_shade(h / 2, h), Rgb::grey(0).pack());
}

#[test]
fn test_material_color_comes_from_hit_symbol() {
    let map = GridMap::from_rows(&["#B#", "#.#", "###"], b"#B").unwrap();
    let player = PlayerState::new(1.5, 1.5, std::f32::consts::PI, 1.0);
    let mut buf = PixelBuffer::new(4, 40);
    let mut renderer = ColumnRenderer::default();

    let hit = renderer.render_column(&mut buf, 2, &player, &map, &config(16.0));
    assert_eq!(hit.tile, Some(BRICK_TILE));
    let c = buf.get_rgb(2, 20).unwrap();
    assert!(c.r > c.b, "brick should be warm: {c:?}");
}

#[test]
fn test_render_frame_writes_every_pixel() {
    let map = GridMap::builtin();
    let player = PlayerState::default();
    let mut buf = PixelBuffer::new(64, 48);
    buf.clear(0);

    let mut renderer = ColumnRenderer::default();
    renderer.render_frame(&mut buf, &player, &map, &config(16.0));
    assert!(buf.pixels().iter().all(|&p| p & ALPHA_OPAQUE == ALPHA_OPAQUE));
}

#[test]
fn test_render_frame_is_deterministic() {
    let map = GridMap::builtin();
    let player = PlayerState::new(7.3, 4.1, 1.2, 3.0);
    let mut a = PixelBuffer::new(40, 30);
    let mut b = PixelBuffer::new(40, 30);

    ColumnRenderer::default().render_frame(&mut a, &player, &map, &config(16.0));
    ColumnRenderer::default().render_frame(&mut b, &player, &map, &config(16.0));
    assert_eq!(a, b);
}
