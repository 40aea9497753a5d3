use ratatui::style::Color;

use crate::game::board::{Board, Cell};
use crate::game::piece::ActivePiece;
use crate::game::state::Phase;

/// Everything the presentation side may look at, copied out of the game.
#[derive(Clone, PartialEq, Debug)]
pub struct Snapshot {
    pub board: Board,
    pub piece: ActivePiece,
    pub phase: Phase,
}

impl Snapshot {
    /// Every board cell as (x, y, cell), row by row from the top.
    pub fn board_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.board
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &cell)| (x, y, cell)))
    }

    /// Absolute cells of the falling piece, including any above the field.
    pub fn piece_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.piece.cells()
    }

    pub fn piece_color(&self) -> Color {
        self.piece.color
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// The board with the piece painted over it, clipped to the grid.
    pub fn composite(&self) -> Board {
        let mut board = self.board.clone();
        for (x, y) in self.piece_cells() {
            board.set(x, y, Cell::Filled(self.piece.color));
        }
        board
    }
}
