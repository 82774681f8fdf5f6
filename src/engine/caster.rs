//! Per-column ray casting over the tile grid.
//!
//! Each ray runs two grid-line walks, one over horizontal lines (`y = k·tile`)
//! and one over vertical lines (`x = k·tile`), and keeps the nearer hit.
//! Ray directions are produced by repeatedly applying one small rotation to
//! the leftmost direction, so there is no trig per column.  The sweep
//! restarts from the player's matrix every frame; drift never carries over.

use bitflags::bitflags;
use glam::{Vec2, vec2};

use crate::sim::Player;
use crate::world::{Cell, EMPTY, Grid, Rotation, from_parameter};

bitflags! {
    /// Which way a ray points.  Exactly one of UP/DOWN and one of
    /// LEFT/RIGHT is set; zero components count as UP / LEFT.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Facing: u8 {
        const UP    = 0b0001;
        const DOWN  = 0b0010;
        const LEFT  = 0b0100;
        const RIGHT = 0b1000;
    }
}

impl Facing {
    #[inline]
    pub fn of(dir: Vec2) -> Self {
        let vertical = if dir.y > 0.0 { Facing::DOWN } else { Facing::UP };
        let horizontal = if dir.x > 0.0 {
            Facing::RIGHT
        } else {
            Facing::LEFT
        };
        vertical | horizontal
    }
}

/// Which family of grid lines the chosen hit sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitAxis {
    /// `y = k·tile` line (wall face points north/south).
    #[default]
    Horizontal,
    /// `x = k·tile` line (wall face points east/west).
    Vertical,
}

/// Result for one screen column.  Overwritten every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    pub dir: Vec2,
    pub hit: Vec2,
    pub content: Cell,
    pub axis: HitAxis,
    pub facing: Facing,
}

impl Ray {
    #[inline]
    pub fn was_hit_vertical(&self) -> bool {
        self.axis == HitAxis::Vertical
    }
}

/// Candidate from one of the two line walks.
#[derive(Clone, Copy, Debug)]
struct AxisHit {
    point: Vec2,
    content: Cell,
}

/// Owns the per-column ray arena.
pub struct RayCaster {
    rays: Vec<Ray>,
    first_parameter: f32,
    step: Rotation,
}

impl RayCaster {
    /// `ray_count` columns; the leftmost ray sits at `first_parameter` and
    /// each next one `ray_step` further (both in rotation-parameter units).
    pub fn new(ray_count: usize, first_parameter: f32, ray_step: f32) -> Self {
        Self {
            rays: vec![Ray::default(); ray_count],
            first_parameter,
            step: Rotation::by_amount(ray_step),
        }
    }

    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Direction of column 0 for the given heading matrix.
    #[inline]
    pub fn first_direction(&self, heading: &Rotation) -> Vec2 {
        heading.apply(from_parameter(self.first_parameter))
    }

    /// Sweep every column left to right.
    pub fn cast_all(&mut self, grid: &Grid, player: &Player) {
        let origin = player.pos();
        let mut dir = self.first_direction(player.rotation());

        for slot in self.rays.iter_mut() {
            *slot = cast_ray(grid, origin, dir);
            self.step.rotate(&mut dir);
        }
    }
}

/// Trace one ray from `origin` along `dir` to the nearest wall.
///
/// # Panics
/// If neither walk finds a wall.  On an enclosed grid that cannot happen.
pub fn cast_ray(grid: &Grid, origin: Vec2, dir: Vec2) -> Ray {
    let facing = Facing::of(dir);

    let horz = scan_horizontal(grid, origin, dir, facing);
    let vert = scan_vertical(grid, origin, dir, facing);

    // squared distances; only the ordering matters
    let horz_dist = horz.map_or(f32::INFINITY, |h| origin.distance_squared(h.point));
    let vert_dist = vert.map_or(f32::INFINITY, |h| origin.distance_squared(h.point));

    // ties go to the horizontal hit
    let (hit, axis) = if vert_dist < horz_dist {
        (vert, HitAxis::Vertical)
    } else {
        (horz, HitAxis::Horizontal)
    };
    let hit = hit.expect("ray left the grid without hitting a wall: map perimeter must be solid");

    Ray {
        dir,
        hit: hit.point,
        content: hit.content,
        axis,
        facing,
    }
}

/// Walk the `y = k·tile` lines.  `None` for horizontal rays.
fn scan_horizontal(grid: &Grid, origin: Vec2, dir: Vec2, facing: Facing) -> Option<AxisHit> {
    if dir.y == 0.0 {
        return None;
    }
    let tile = grid.tile_size();
    let up = facing.contains(Facing::UP);
    let slope = dir.x / dir.y;

    /* first crossing */
    let mut y = (origin.y / tile).floor() * tile;
    if !up {
        y += tile;
    }
    let x = origin.x + (y - origin.y) * slope;

    /* per-line increments, always heading away from the origin */
    let mut x_step = tile * slope;
    if facing.contains(Facing::LEFT) && x_step > 0.0 {
        x_step = -x_step;
    }
    if facing.contains(Facing::RIGHT) && x_step < 0.0 {
        x_step = -x_step;
    }
    let y_step = if up { -tile } else { tile };

    // sample the tile on the far side of the line
    let lookup_offset = vec2(0.0, if up { -1.0 } else { 0.0 });
    walk(grid, vec2(x, y), vec2(x_step, y_step), lookup_offset)
}

/// Walk the `x = k·tile` lines.  `None` for vertical rays.
fn scan_vertical(grid: &Grid, origin: Vec2, dir: Vec2, facing: Facing) -> Option<AxisHit> {
    if dir.x == 0.0 {
        return None;
    }
    let tile = grid.tile_size();
    let left = facing.contains(Facing::LEFT);
    let slope = dir.y / dir.x;

    let mut x = (origin.x / tile).floor() * tile;
    if !left {
        x += tile;
    }
    let y = origin.y + (x - origin.x) * slope;

    let mut y_step = tile * slope;
    if facing.contains(Facing::UP) && y_step > 0.0 {
        y_step = -y_step;
    }
    if facing.contains(Facing::DOWN) && y_step < 0.0 {
        y_step = -y_step;
    }
    let x_step = if left { -tile } else { tile };

    let lookup_offset = vec2(if left { -1.0 } else { 0.0 }, 0.0);
    walk(grid, vec2(x, y), vec2(x_step, y_step), lookup_offset)
}

/// Step from line crossing to line crossing until a wall or the map edge.
#[inline]
fn walk(grid: &Grid, mut touch: Vec2, step: Vec2, lookup_offset: Vec2) -> Option<AxisHit> {
    while grid.in_bounds(touch) {
        let lookup = touch + lookup_offset;
        if grid.has_wall_at(lookup) {
            let content = grid.content_at(lookup);
            debug_assert!(content != EMPTY);
            return Some(AxisHit {
                point: touch,
                content,
            });
        }
        touch += step;
    }
    None
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
