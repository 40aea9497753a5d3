use ratatui::style::Color;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::piece::Shape;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

pub type Row = [Cell; BOARD_WIDTH];

/// The locked cells. Knows nothing about the falling piece.
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    cells: [Row; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Returns None outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells.get(y as usize)?.get(x as usize).copied()
    }

    /// Returns false (and changes nothing) outside the grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        match self.cells.get_mut(y as usize).and_then(|row| row.get_mut(x as usize)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[Row; BOARD_HEIGHT] {
        &self.cells
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < BOARD_HEIGHT && self.cells[y].iter().all(Cell::is_filled)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_filled()).count()
    }

    /// Walls and floor always collide. Cells above the top edge (y < 0)
    /// only collide if they are also outside the side walls, so a piece
    /// may hang partially above the field.
    pub fn collides(&self, shape: &Shape, offset_x: i32, offset_y: i32) -> bool {
        shape.cells().any(|(sx, sy)| {
            let px = offset_x + sx;
            let py = offset_y + sy;
            if px < 0 || px >= BOARD_WIDTH as i32 || py >= BOARD_HEIGHT as i32 {
                return true;
            }
            py >= 0 && self.cells[py as usize][px as usize].is_filled()
        })
    }

    /// Writes the shape into the grid. The caller checks `collides` first;
    /// cells above the top edge are dropped.
    pub fn lock(&mut self, shape: &Shape, color: Color, offset_x: i32, offset_y: i32) {
        debug_assert!(
            !self.collides(shape, offset_x, offset_y),
            "locking a piece that overlaps the board"
        );
        for (sx, sy) in shape.cells() {
            self.set(offset_x + sx, offset_y + sy, Cell::Filled(color));
        }
    }

    pub fn clear_full_lines(&mut self) -> usize {
        self.clear_full_lines_with(|_| {})
    }

    /// Removes every full row, calling `on_clear` with the row index each
    /// time one goes. Rows above a cleared row drop by one and an empty row
    /// enters at the top.
    pub fn clear_full_lines_with<F: FnMut(usize)>(&mut self, mut on_clear: F) -> usize {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                on_clear(row);
                self.cells.copy_within(0..row, 1);
                self.cells[0] = [Cell::Empty; BOARD_WIDTH];
                cleared += 1;
                // same index again: the row above just moved into it
                continue;
            }
            y -= 1;
        }

        cleared
    }
}
