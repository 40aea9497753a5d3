pub mod renderer;

pub use renderer::{board_lines, ui, UiOptions};
