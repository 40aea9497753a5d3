use rand::Rng;
use ratatui::style::Color;

use crate::constants::{SHAPE_SIZE, SPAWN_X, SPAWN_Y};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    I, O, Z, S, L, J, T
}

/// A 4x4 occupancy matrix, row-major, origin at the top-left of the frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shape {
    rows: [[bool; SHAPE_SIZE]; SHAPE_SIZE],
}

impl Shape {
    /// Builds a shape from 0/1 rows. Panics at compile time for an empty
    /// matrix when used in a const context.
    pub const fn from_bits(bits: [[u8; SHAPE_SIZE]; SHAPE_SIZE]) -> Self {
        let mut rows = [[false; SHAPE_SIZE]; SHAPE_SIZE];
        let mut any = false;
        let mut y = 0;
        while y < SHAPE_SIZE {
            let mut x = 0;
            while x < SHAPE_SIZE {
                rows[y][x] = bits[y][x] != 0;
                any |= rows[y][x];
                x += 1;
            }
            y += 1;
        }
        assert!(any, "a shape needs at least one cell");
        Self { rows }
    }

    /// Local (x, y) coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(x, _)| (x as i32, y as i32))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// 90 degrees clockwise inside the fixed frame: `new[x][3 - y] = old[y][x]`.
    pub fn rotate_clockwise(self) -> Self {
        let mut rotated = [[false; SHAPE_SIZE]; SHAPE_SIZE];

        for y in 0..SHAPE_SIZE {
            for x in 0..SHAPE_SIZE {
                rotated[x][SHAPE_SIZE - 1 - y] = self.rows[y][x];
            }
        }

        Self { rows: rotated }
    }

    pub fn rotate_counter_clockwise(self) -> Self {
        self.rotate_clockwise().rotate_clockwise().rotate_clockwise()
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

pub const CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        shape: Shape::from_bits([[1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Rgb(255, 0, 0),
    },
    PieceDef {
        kind: PieceKind::O,
        shape: Shape::from_bits([[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Rgb(0, 255, 0),
    },
    PieceDef {
        kind: PieceKind::Z,
        shape: Shape::from_bits([[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Rgb(0, 0, 255),
    },
    PieceDef {
        kind: PieceKind::S,
        shape: Shape::from_bits([[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Rgb(255, 255, 0),
    },
    PieceDef {
        kind: PieceKind::L,
        shape: Shape::from_bits([[1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Rgb(255, 165, 0),
    },
    PieceDef {
        kind: PieceKind::J,
        shape: Shape::from_bits([[1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Rgb(0, 255, 255),
    },
    PieceDef {
        kind: PieceKind::T,
        shape: Shape::from_bits([[1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Rgb(128, 0, 128),
    },
];

pub fn pick_random<R: Rng + ?Sized>(rng: &mut R) -> &'static PieceDef {
    &CATALOG[rng.gen_range(0..CATALOG.len())]
}

pub fn def(kind: PieceKind) -> &'static PieceDef {
    // CATALOG is ordered like PieceKind
    &CATALOG[kind as usize]
}

/// The falling piece: a shape in its current rotation placed at an offset.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    pub fn spawn(def: &PieceDef) -> Self {
        Self::at(def, SPAWN_X, SPAWN_Y)
    }

    pub fn at(def: &PieceDef, x: i32, y: i32) -> Self {
        Self {
            kind: def.kind,
            shape: def.shape,
            color: def.color,
            x,
            y,
        }
    }

    /// Absolute board coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.cells().map(move |(sx, sy)| (self.x + sx, self.y + sy))
    }
}
