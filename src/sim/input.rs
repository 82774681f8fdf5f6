/// Discrete key actions the player responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Forward,
    Back,
    TurnLeft,
    TurnRight,
}

/// Movement intent for one frame.  Both axes are −1, 0 or +1.
///
/// Edge-triggered: a press sets its axis, a release clears it, no matter
/// which key of the pair is let go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCmd {
    pub walk: i8, // +1 forward, −1 back
    pub turn: i8, // +1 clockwise on screen (right), −1 left
}

impl InputCmd {
    pub fn new(turn: i8, walk: i8) -> Self {
        Self {
            turn: turn.signum(),
            walk: walk.signum(),
        }
    }

    pub fn press(&mut self, action: Action) {
        match action {
            Action::Forward => self.walk = 1,
            Action::Back => self.walk = -1,
            Action::TurnLeft => self.turn = -1,
            Action::TurnRight => self.turn = 1,
        }
    }

    pub fn release(&mut self, action: Action) {
        match action {
            Action::Forward | Action::Back => self.walk = 0,
            Action::TurnLeft | Action::TurnRight => self.turn = 0,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.walk == 0 && self.turn == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_release_clears() {
        let mut cmd = InputCmd::default();
        cmd.press(Action::Forward);
        cmd.press(Action::TurnLeft);
        assert_eq!(cmd, InputCmd { walk: 1, turn: -1 });

        // latest press on an axis wins
        cmd.press(Action::Back);
        assert_eq!(cmd.walk, -1);

        // releasing either key of a pair clears the axis
        cmd.release(Action::Forward);
        assert_eq!(cmd.walk, 0);
        cmd.release(Action::TurnRight);
        assert!(cmd.is_idle());
    }

    #[test]
    fn new_clamps_to_unit_steps() {
        assert_eq!(InputCmd::new(5, -9), InputCmd { turn: 1, walk: -1 });
        assert!(InputCmd::new(0, 0).is_idle());
    }
}
