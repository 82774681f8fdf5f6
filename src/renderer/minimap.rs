use crate::engine::Ray;
use crate::renderer::{Overlay, Rgba};
use crate::sim::Player;
use crate::world::{EMPTY, Grid};

const WALL: Rgba = 0xFF_FFFFFF;
const FLOOR: Rgba = 0xFF_000000;
const RAY: Rgba = 0xFF_FF0000;
const PLAYER: Rgba = 0xFF_FFFFFF;

/// World units the heading marker sticks out in front of the player.
const HEADING_LEN: f32 = 40.0;
/// Player marker side, in world units.
const PLAYER_SIZE: f32 = 8.0;

/// Top-down view in the upper-left corner: tiles, every ray up to its hit,
/// and the player with a heading marker.  `scale` maps world units to
/// pixels.
pub fn draw_minimap<O: Overlay + ?Sized>(
    out: &mut O,
    grid: &Grid,
    player: &Player,
    rays: &[Ray],
    scale: f32,
) {
    let px = |v: f32| (v * scale) as i32;

    /* tiles */
    let tile = grid.tile_size();
    let tile_px = px(tile).max(1);
    for (col, row, cell) in grid.iter() {
        let colour = if cell != EMPTY { WALL } else { FLOOR };
        out.fill_rect(
            px(col as f32 * tile),
            px(row as f32 * tile),
            tile_px,
            tile_px,
            colour,
        );
    }

    /* rays */
    let eye = player.pos();
    for ray in rays {
        out.draw_line(px(eye.x), px(eye.y), px(ray.hit.x), px(ray.hit.y), RAY);
    }

    /* player + heading */
    let half = PLAYER_SIZE * 0.5;
    let size = px(PLAYER_SIZE).max(1);
    out.fill_rect(px(eye.x - half), px(eye.y - half), size, size, PLAYER);
    let tip = eye + player.orientation() * HEADING_LEN;
    out.draw_line(px(eye.x), px(eye.y), px(tip.x), px(tip.y), PLAYER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cast_ray;
    use crate::world::{Cell, TILE_SIZE};
    use glam::{Vec2, vec2};

    /// Records primitive calls instead of drawing.
    #[derive(Default)]
    struct Recorder {
        rects: Vec<(i32, i32, i32, i32, Rgba)>,
        lines: Vec<(i32, i32, i32, i32, Rgba)>,
    }

    impl Overlay for Recorder {
        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Rgba) {
            self.rects.push((x, y, w, h, colour));
        }
        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Rgba) {
            self.lines.push((x0, y0, x1, y1, colour));
        }
    }

    #[test]
    fn emits_tiles_rays_and_player() {
        let rows: [[Cell; 3]; 3] = [[1, 1, 1], [1, 0, 1], [1, 1, 1]];
        let g = Grid::from_rows(&rows, TILE_SIZE).unwrap();
        let player = Player::new(g.tile_center(1, 1), Vec2::X);
        let rays = [cast_ray(&g, player.pos(), Vec2::X)];

        let mut rec = Recorder::default();
        draw_minimap(&mut rec, &g, &player, &rays, 0.25);

        // 9 tiles + player marker
        assert_eq!(rec.rects.len(), 10);
        assert_eq!(rec.rects[0], (0, 0, 16, 16, WALL));
        assert_eq!(rec.rects[4], (16, 16, 16, 16, FLOOR));

        // ray from (96, 96) to the east wall face at (128, 96), then heading
        assert_eq!(rec.lines[0], (24, 24, 32, 24, RAY));
        assert_eq!(rec.lines[1], (24, 24, 34, 24, PLAYER));
    }

    #[test]
    fn draws_into_frame_buffer() {
        use crate::renderer::FrameBuffer;

        let g = Grid::reference();
        let player = Player::new(vec2(640.0, 416.0), Vec2::NEG_X);
        let mut fb = FrameBuffer::new(320, 200);
        draw_minimap(&mut fb, &g, &player, &[], 0.2);
        // top-left tile is a wall
        assert_eq!(fb.get(0, 0), WALL);
        // player marker at (128, 83)
        assert_eq!(fb.get(128, 83), PLAYER);
    }
}
