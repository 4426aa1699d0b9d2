//! Quest dungeon runs: timed exploration, encounters, and rewards.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
