use glam::Vec2;

use super::caster::{HitAxis, Ray};
use crate::renderer::{FrameBuffer, Rgba};
use crate::sim::Player;

/// Fixed colours for the three bands of a column.
#[derive(Clone, Copy, Debug)]
pub struct Shades {
    pub ceiling: Rgba,
    pub floor: Rgba,
    /// Wall face hit on an `x = k·tile` line.
    pub vertical: Rgba,
    /// Wall face hit on a `y = k·tile` line.
    pub horizontal: Rgba,
}

impl Default for Shades {
    fn default() -> Self {
        Self {
            ceiling: 0xFF_333333,
            floor: 0xFF_777777,
            vertical: 0xFF_FFFFFF,
            horizontal: 0xFF_CCCCCC,
        }
    }
}

/// Vertical extent of one wall strip: ceiling `[0, top)`, wall
/// `[top, bottom)`, floor `[bottom, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub top: usize,
    pub bottom: usize,
    pub axis: HitAxis,
}

/// Distance from `eye` to `hit` measured along the heading.  Using this
/// instead of the ray length removes the fisheye bulge.
#[inline]
pub fn perpendicular_distance(hit: Vec2, eye: Vec2, heading: Vec2) -> f32 {
    (hit - eye).dot(heading)
}

/// Turns cast rays into shaded columns.
#[derive(Clone, Debug)]
pub struct Projector {
    tile_size: f32,
    plane_dist: f32,
    height: usize,
    pub shades: Shades,
}

impl Projector {
    /// `plane_dist` is the eye-to-projection-plane distance in pixels.
    pub fn new(tile_size: f32, plane_dist: f32, height: usize) -> Self {
        Self {
            tile_size,
            plane_dist,
            height,
            shades: Shades::default(),
        }
    }

    /// Projected wall height in pixels for a wall `perp` units ahead.
    #[inline]
    pub fn wall_strip_height(&self, perp: f32) -> f32 {
        (self.tile_size / perp) * self.plane_dist
    }

    /// Centre the strip on the horizon and clamp it to the viewport.
    pub fn column(&self, ray: &Ray, player: &Player) -> Column {
        let perp = perpendicular_distance(ray.hit, player.pos(), player.orientation());
        // float → int saturates, so a zero distance gives a full column
        let strip = self.wall_strip_height(perp) as i64;
        let h = self.height as i64;

        let top = (h / 2 - strip / 2).clamp(0, h);
        let bottom = (h / 2 + strip / 2).clamp(top, h);

        Column {
            top: top as usize,
            bottom: bottom as usize,
            axis: ray.axis,
        }
    }

    /// Fill column `x` of `fb`.
    pub fn draw_column(&self, fb: &mut FrameBuffer, x: usize, col: Column) {
        let wall = match col.axis {
            HitAxis::Vertical => self.shades.vertical,
            HitAxis::Horizontal => self.shades.horizontal,
        };
        fb.fill_column(x, 0, col.top, self.shades.ceiling);
        fb.fill_column(x, col.top, col.bottom, wall);
        fb.fill_column(x, col.bottom, self.height, self.shades.floor);
    }

    /// Project every ray, one column each, left to right.
    pub fn project(&self, rays: &[Ray], player: &Player, fb: &mut FrameBuffer) {
        debug_assert_eq!(fb.height(), self.height);
        for (x, ray) in rays.iter().enumerate().take(fb.width()) {
            let col = self.column(ray, player);
            self.draw_column(fb, x, col);
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
