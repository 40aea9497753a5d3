//! Falling-block puzzle game: the game rules live in [`game`], the terminal
//! shell around them in [`input`], [`ui`], [`audio`] and [`config`].

pub mod audio;
pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
