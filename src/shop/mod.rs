//! The shop: buying quests and items, selling items back.

#![allow(unused_imports)]

pub mod data;
pub mod logic;

pub use data::*;
pub use logic::*;
