pub mod handler;

pub use handler::{apply_actions, map_key, map_key_event, KeyAction};

/// The logical inputs the game understands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    MoveLeft,
    MoveRight,
    RotateClockwise,
    Quit,
}
