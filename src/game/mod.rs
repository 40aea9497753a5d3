pub mod board;
pub mod events;
pub mod piece;
pub mod snapshot;
pub mod state;

pub use board::{Board, Cell};
pub use events::{EventCounter, GameEvents, NoEvents};
pub use piece::{ActivePiece, PieceDef, PieceKind, Shape, CATALOG};
pub use snapshot::Snapshot;
pub use state::{Game, Phase, TickOutcome};
