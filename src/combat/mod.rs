//! Turn-based combat: enemies, formulas, and the encounter state machine.

#![allow(unused_imports)]

pub mod data;
pub mod encounter;
pub mod logic;
pub mod types;

pub use data::*;
pub use encounter::*;
pub use logic::*;
pub use types::*;
