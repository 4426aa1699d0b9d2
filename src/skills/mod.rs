//! Skill tree: definitions, the parent/child index, unlocking and upgrading.

#![allow(unused_imports)]

pub mod data;
pub mod logic;
pub mod tree;
pub mod types;

pub use data::*;
pub use logic::*;
pub use tree::*;
pub use types::*;
