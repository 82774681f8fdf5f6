use glam::Vec2;

use super::input::InputCmd;
use crate::world::{Grid, Rotation};

/// Rotation parameter units per second.
pub const TURN_SPEED: f32 = 1.0;
/// World units per second.
pub const MOVE_SPEED: f32 = 100.0;

/// Viewer state.  Heading is a unit vector plus its cached matrix; there is
/// no angle anywhere.
#[derive(Clone, Debug)]
pub struct Player {
    pos: Vec2,
    orientation: Vec2,
    rotation: Rotation, // always `Rotation::from_unit(orientation)`
    pub input: InputCmd,
    pub turn_speed: f32,
    pub move_speed: f32,
}

impl Player {
    /// `heading` need not be normalised; a zero heading falls back to `+X`.
    pub fn new(pos: Vec2, heading: Vec2) -> Self {
        let orientation = heading.try_normalize().unwrap_or(Vec2::X);
        Self {
            pos,
            orientation,
            rotation: Rotation::from_unit(orientation),
            input: InputCmd::default(),
            turn_speed: TURN_SPEED,
            move_speed: MOVE_SPEED,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Unit heading.
    #[inline]
    pub fn orientation(&self) -> Vec2 {
        self.orientation
    }

    /// Matrix carrying `+X` onto the heading.  Ray casting reads this.
    #[inline]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Apply the stored [`InputCmd`] for `dt` seconds.
    pub fn update(&mut self, dt: f32, grid: &Grid) {
        let InputCmd { turn, walk } = self.input;
        self.apply_intent(turn, walk, dt, grid);
    }

    /// Turn, then move along the new heading if the destination is open.
    ///
    /// Collision is a single test on the destination point; there is no
    /// per-axis sliding along walls.
    pub fn apply_intent(&mut self, turn: i8, walk: i8, dt: f32, grid: &Grid) {
        /* 1. turn */
        if turn != 0 {
            let step = Rotation::by_amount(turn.signum() as f32 * self.turn_speed * dt);
            step.rotate(&mut self.orientation);
            // keep |heading| = 1 across frames
            self.orientation = self.orientation.try_normalize().unwrap_or(Vec2::X);
        }
        self.rotation = Rotation::from_unit(self.orientation);

        /* 2. move */
        if walk == 0 {
            return;
        }
        let step = walk.signum() as f32 * self.move_speed * dt;
        let candidate = self.pos + self.orientation * step;

        /* 3. collide */
        if !grid.has_wall_at(candidate) {
            self.pos = candidate;
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
