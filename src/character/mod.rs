//! Character attributes and the stats derived from them.

#![allow(unused_imports)]

pub mod attributes;
pub mod derived_stats;

pub use attributes::*;
pub use derived_stats::*;
