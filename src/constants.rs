pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Side length of the square frame every shape lives in.
pub const SHAPE_SIZE: usize = 4;

/// Column of a freshly spawned piece's local origin.
pub const SPAWN_X: i32 = BOARD_WIDTH as i32 / 2 - 2;
pub const SPAWN_Y: i32 = 0;

// Gravity interval of the classic game (milliseconds)
pub const DEFAULT_TICK_MS: u64 = 370;

// Upper bound on terminal events read between two ticks
pub const MAX_EVENTS_PER_TICK: usize = 32;

// Terminal columns per board cell
pub const CELL_WIDTH: u16 = 2;
