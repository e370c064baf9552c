//! A small roguelite where every door hides a round of trivia.
//!
//! The game is a state machine over a handful of screens (menu, corridor, trivia room, shop, inventory, lose and
//! victory), drawn onto a character grid and driven by a little message-passing [`engine`]. Background music follows
//! the current screen through a [`Jukebox`](audio::Jukebox).
//!
//! # Feature selection
//!
//! -   `run_single` (default) runs everything on one thread. `run_rayon` spreads agents across `rayon`'s pool and
//!     runs the game loop off the main thread.
//! -   `sys_cli` (default) draws to a terminal with `crossterm`. The scripted backend in [`io::sys::scripted`] is
//!     always available for headless runs.
//! -   `audio_rodio` plays the music with `rodio`. Without it the game is silent.

pub mod assets;
pub mod audio;
pub mod config;
pub mod constants;
pub mod engine;
mod error;
pub mod event;
pub mod game;
pub mod io;
pub mod logging;
pub mod metronome;
pub mod player;
pub mod scenes;
pub mod state;
pub mod trivia;

pub use self::{
    error::{Error, Result},
    event::Event,
    game::TriviaRoguelite,
    state::GameState,
};
