//! Timed stat training.

#![allow(unused_imports)]

pub mod session;

pub use session::*;
