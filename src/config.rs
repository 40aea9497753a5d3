use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::DEFAULT_TICK_MS;

/// Falling-block puzzle in the terminal.
///
/// Left/Right (or A/D) move, Down/Up/W/Space rotate, R restarts, Q or Esc quits.
#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about)]
pub struct Args {
    /// Gravity interval in milliseconds
    #[arg(
        long,
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Seed for the piece sequence (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Don't play any sounds
    #[arg(long)]
    pub mute: bool,

    /// Draw every locked cell in plain white instead of its piece color
    #[arg(long)]
    pub classic_colors: bool,

    /// Keep the last frame on screen after game over until Q or R is pressed
    #[arg(long)]
    pub hold_on_game_over: bool,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
