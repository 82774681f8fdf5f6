mod clock;
mod input;
mod player;

pub use clock::{FrameClock, MAX_FRAME_TIME, TARGET_FPS};
pub use input::{Action, InputCmd};
pub use player::{MOVE_SPEED, Player, TURN_SPEED};
