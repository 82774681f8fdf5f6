//! Fixed view and movement constants, plus the quantities derived from them.

use glam::Vec2;

use crate::sim::{MOVE_SPEED, TARGET_FPS, TURN_SPEED};
use crate::world::Grid;

/// Focal length of the virtual camera.  The view spans rotation parameters
/// `−1/FOCAL_LENGTH ..= +1/FOCAL_LENGTH`.
pub const FOCAL_LENGTH: f32 = 3.5;

/// Minimap size relative to the world.
pub const MINIMAP_SCALE: f32 = 0.2;

#[derive(Clone, Debug)]
pub struct Config {
    /// Viewport in pixels.  One ray per column.
    pub width: usize,
    pub height: usize,
    pub focal_length: f32,
    pub turn_speed: f32,
    pub move_speed: f32,
    pub fps: u32,
    pub minimap_scale: f32,
    pub show_minimap: bool,
    /// Spawn point; `None` = map centre.
    pub start_pos: Option<Vec2>,
    pub start_heading: Vec2,
}

impl Config {
    /// Viewport the size of the map at one pixel per world unit.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width() as usize,
            height: grid.height() as usize,
            focal_length: FOCAL_LENGTH,
            turn_speed: TURN_SPEED,
            move_speed: MOVE_SPEED,
            fps: TARGET_FPS,
            minimap_scale: MINIMAP_SCALE,
            show_minimap: true,
            start_pos: None,
            start_heading: Vec2::NEG_X,
        }
    }

    #[inline]
    pub fn ray_count(&self) -> usize {
        self.width
    }

    /// Half-width of the projection plane in rotation-parameter units.
    #[inline]
    pub fn fov_ratio(&self) -> f32 {
        1.0 / self.focal_length
    }

    /// Parameter of the leftmost ray relative to the heading.
    #[inline]
    pub fn first_ray_parameter(&self) -> f32 {
        -self.fov_ratio()
    }

    /// Parameter increment between neighbouring columns.
    #[inline]
    pub fn ray_step(&self) -> f32 {
        2.0 * self.fov_ratio() / self.ray_count().max(1) as f32
    }

    /// Eye to projection plane, in pixels.
    #[inline]
    pub fn projection_plane_distance(&self) -> f32 {
        (self.width as f32 * 0.5) * (self.focal_length * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_viewport() {
        let cfg = Config::for_grid(&Grid::reference());
        assert_eq!((cfg.width, cfg.height), (1280, 832));
        assert_eq!(cfg.ray_count(), 1280);
        assert!((cfg.first_ray_parameter() + 1.0 / 3.5).abs() < 1e-7);
        assert!((cfg.ray_step() * 1280.0 - 2.0 / 3.5).abs() < 1e-6);
        assert!((cfg.projection_plane_distance() - 1120.0).abs() < 1e-3);
    }
}
