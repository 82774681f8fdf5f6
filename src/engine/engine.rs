use crate::{
    config::Config,
    engine::{caster::Ray, caster::RayCaster, projection::Projector},
    renderer::{FrameBuffer, Rgba, minimap::draw_minimap},
    sim::Player,
    world::{Grid, GridError},
};

/// Everything one frame touches, owned in one place.
///
/// The frame loop drives it in two steps:
///
/// ```text
/// engine.update(dt);                      // move, then cast all rays
/// engine.render_frame(|fb, w, h| { … });  // project, overlay, present
/// ```
///
/// Both take `&mut self`, so casting can never interleave with movement.
pub struct Engine {
    grid: Grid,
    player: Player,
    caster: RayCaster,
    projector: Projector,
    frame: FrameBuffer,
    minimap_scale: f32,
    pub show_minimap: bool,
}

impl Engine {
    /// Refuses grids whose border has an opening.
    pub fn new(grid: Grid, config: &Config) -> Result<Self, GridError> {
        grid.check_enclosed()?;

        let start = config
            .start_pos
            .unwrap_or_else(|| glam::Vec2::new(grid.width() * 0.5, grid.height() * 0.5));
        let mut player = Player::new(start, config.start_heading);
        player.turn_speed = config.turn_speed;
        player.move_speed = config.move_speed;

        let caster = RayCaster::new(
            config.ray_count(),
            config.first_ray_parameter(),
            config.ray_step(),
        );
        let projector = Projector::new(
            grid.tile_size(),
            config.projection_plane_distance(),
            config.height,
        );

        Ok(Self {
            grid,
            player,
            caster,
            projector,
            frame: FrameBuffer::new(config.width, config.height),
            minimap_scale: config.minimap_scale,
            show_minimap: config.show_minimap,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }
    #[inline]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
    #[inline]
    pub fn rays(&self) -> &[Ray] {
        self.caster.rays()
    }
    #[inline]
    pub fn projector(&self) -> &Projector {
        &self.projector
    }
    #[inline]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Advance the player by `dt` seconds, then re-cast every column.
    pub fn update(&mut self, dt: f32) {
        self.player.update(dt, &self.grid);
        self.caster.cast_all(&self.grid, &self.player);
    }

    /// Paint the frame and **loan** it to `submit(fb, width, height)`,
    /// exactly once.
    pub fn render_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.projector
            .project(self.caster.rays(), &self.player, &mut self.frame);

        if self.show_minimap {
            draw_minimap(
                &mut self.frame,
                &self.grid,
                &self.player,
                self.caster.rays(),
                self.minimap_scale,
            );
        }

        submit(
            self.frame.as_slice(),
            self.frame.width(),
            self.frame.height(),
        );
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
