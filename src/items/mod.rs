//! Item system: types, equipment slots, and inventory operations.

#![allow(unused_imports)]

pub mod equipment;
pub mod inventory;
pub mod types;

pub use equipment::*;
pub use inventory::*;
pub use types::*;
