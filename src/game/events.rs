/// Signals raised by the controller while a tick runs. Implementations must
/// not block and have no way to fail the tick.
pub trait GameEvents {
    fn piece_locked(&mut self) {}
    fn line_cleared(&mut self) {}
}

/// Drops every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEvents;

impl GameEvents for NoEvents {}

/// Counts signals; used by tests and handy for debugging a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventCounter {
    pub pieces_locked: u32,
    pub lines_cleared: u32,
}

impl GameEvents for EventCounter {
    fn piece_locked(&mut self) {
        self.pieces_locked += 1;
    }

    fn line_cleared(&mut self) {
        self.lines_cleared += 1;
    }
}
