//! Core game state, rules plumbing, and the game controller.

#![allow(unused_imports)]

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod game_state;
pub mod notifications;
pub mod progression;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use game::*;
pub use game_state::*;
pub use notifications::*;
pub use progression::*;
