use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::board::Board;
use crate::game::events::GameEvents;
use crate::game::piece::{pick_random, ActivePiece};
use crate::game::snapshot::Snapshot;
use crate::input::Input;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Falling,
    Terminated,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    Continue,
    GameOver,
    Quit,
}

pub struct Game {
    board: Board,
    piece: ActivePiece,
    phase: Phase,
    pending: VecDeque<Input>,
    rng: StdRng,
}

impl Game {
    pub fn new(mut rng: StdRng) -> Self {
        let piece = ActivePiece::spawn(pick_random(&mut rng));
        Self::from_parts(Board::new(), piece, rng)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Starts from an arbitrary board and piece. The phase is derived from
    /// whether the piece fits.
    pub fn from_parts(board: Board, piece: ActivePiece, rng: StdRng) -> Self {
        let phase = if board.collides(&piece.shape, piece.x, piece.y) {
            Phase::Terminated
        } else {
            Phase::Falling
        };

        Self {
            board,
            piece,
            phase,
            pending: VecDeque::new(),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &ActivePiece {
        &self.piece
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending_inputs(&self) -> usize {
        self.pending.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            piece: self.piece,
            phase: self.phase,
        }
    }

    pub fn push_input(&mut self, input: Input) {
        self.pending.push_back(input);
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i32) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        let x = self.piece.x + dx;
        if self.board.collides(&self.piece.shape, x, self.piece.y) {
            return false;
        }
        self.piece.x = x;
        true
    }

    /// Clockwise rotation in place; rejected without a kick if the rotated
    /// shape does not fit at the current offset.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        let previous = self.piece.shape;
        self.piece.shape = previous.rotate_clockwise();
        if self.board.collides(&self.piece.shape, self.piece.x, self.piece.y) {
            self.piece.shape = previous;
            return false;
        }
        true
    }

    /// One step of the game: queued inputs first, then exactly one gravity
    /// step (a fall or a lock).
    pub fn tick(&mut self, events: &mut dyn GameEvents) -> TickOutcome {
        if self.phase == Phase::Terminated {
            self.pending.clear();
            return TickOutcome::GameOver;
        }

        while let Some(input) = self.pending.pop_front() {
            match input {
                Input::MoveLeft => {
                    self.move_left();
                }
                Input::MoveRight => {
                    self.move_right();
                }
                Input::RotateClockwise => {
                    self.rotate();
                }
                Input::Quit => {
                    self.pending.clear();
                    return TickOutcome::Quit;
                }
            }
        }

        self.gravity(events)
    }

    fn gravity(&mut self, events: &mut dyn GameEvents) -> TickOutcome {
        let piece = self.piece;
        if !self.board.collides(&piece.shape, piece.x, piece.y + 1) {
            self.piece.y += 1;
            return TickOutcome::Continue;
        }

        events.piece_locked();
        self.board.lock(&piece.shape, piece.color, piece.x, piece.y);
        log::debug!("locked {:?} at ({}, {})", piece.kind, piece.x, piece.y);

        let cleared = self.board.clear_full_lines_with(|row| {
            log::debug!("cleared row {row}");
            events.line_cleared();
        });
        if cleared > 0 {
            log::info!("cleared {cleared} line(s)");
        }

        self.spawn()
    }

    fn spawn(&mut self) -> TickOutcome {
        self.piece = ActivePiece::spawn(pick_random(&mut self.rng));

        if self.board.collides(&self.piece.shape, self.piece.x, self.piece.y) {
            log::info!("game over: no room to spawn {:?}", self.piece.kind);
            self.phase = Phase::Terminated;
            return TickOutcome::GameOver;
        }

        log::debug!("spawned {:?}", self.piece.kind);
        TickOutcome::Continue
    }

    /// Empty board, fresh piece, same random stream.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.pending.clear();
        self.phase = Phase::Falling;
        self.piece = ActivePiece::spawn(pick_random(&mut self.rng));
        log::info!("game reset");
    }
}
