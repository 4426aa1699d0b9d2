//! Quests: the starting and daily lists, adding and completing.

#![allow(unused_imports)]

pub mod data;
pub mod logic;
pub mod types;

pub use data::*;
pub use logic::*;
pub use types::*;
